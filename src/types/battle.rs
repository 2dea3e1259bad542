use serde::{Deserialize, Serialize};

/// Envelope returned by the statistics API for a single mode query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleResponse {
    pub code: i64,
    pub msg: String,
    pub data: BattleResponseData,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleResponseData {
    pub list: Vec<BattleRecord>,
}

/// One played match as reported by the statistics API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BattleRecord {
    #[serde(rename = "dtEventTime")]
    pub event_time: String,
    #[serde(rename = "gametime")]
    pub game_time: String,
    #[serde(rename = "killcnt")]
    pub kills: u32,
    #[serde(rename = "deadcnt")]
    pub deaths: u32,
    #[serde(rename = "assistcnt")]
    pub assists: u32,
    #[serde(rename = "gameresult")]
    pub game_result: i32,
    #[serde(rename = "heroId")]
    pub hero_id: i64,
    #[serde(rename = "mapName")]
    pub map_name: String,
    #[serde(rename = "gradeGame")]
    pub grade: String,
    #[serde(rename = "heroIcon")]
    pub hero_icon: String,
    #[serde(rename = "roleJobName")]
    pub role_job_name: String,
    pub stars: i32,
    #[serde(rename = "gameSeq")]
    pub game_seq: String,
    #[serde(rename = "battleType")]
    pub battle_type: i32,
}

impl BattleRecord {
    pub fn is_win(&self) -> bool {
        self.game_result == 1
    }

    /// Key used to collapse the same match reported by several modes.
    pub fn dedup_key(&self) -> String {
        if self.game_seq.is_empty() {
            format!("{}-{}", self.event_time, self.hero_id)
        } else {
            self.game_seq.clone()
        }
    }
}

/// Query category offered to the user. Each maps to one or more API modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    All,
    Ranked,
    Peak,
    Casual,
    Room,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Ranked,
        Category::Peak,
        Category::Casual,
        Category::Room,
    ];

    /// Parses the numeric category code; anything unknown means `All`.
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "2" => Category::Ranked,
            "3" => Category::Peak,
            "4" => Category::Casual,
            "5" => Category::Room,
            _ => Category::All,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Category::All => "1",
            Category::Ranked => "2",
            Category::Peak => "3",
            Category::Casual => "4",
            Category::Room => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "全部比赛",
            Category::Ranked => "排位赛",
            Category::Peak => "巅峰赛",
            Category::Casual => "匹配模式",
            Category::Room => "房间模式",
        }
    }

    /// API `option` values queried for this category.
    pub fn modes(&self) -> &'static [&'static str] {
        match self {
            Category::All => &["0"],
            Category::Ranked => &["1", "16"],
            Category::Peak => &["4"],
            Category::Casual => &["2", "7", "3", "5", "6", "17"],
            Category::Room => &["8", "9", "10"],
        }
    }
}

/// Aggregate numbers shown above the match table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSummary {
    pub total_games: usize,
    pub win_rate: String,
    #[serde(rename = "avgKDA")]
    pub avg_kda: String,
    pub total_wins: usize,
    pub total_loss: usize,
}

/// Color band for a match grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn color(&self) -> &'static str {
        match self {
            ScoreBand::Excellent => "#10b981",
            ScoreBand::Good => "#f59e0b",
            ScoreBand::Fair => "#f97316",
            ScoreBand::Poor => "#ef4444",
        }
    }
}

/// One row of the recent-games table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRow {
    pub index: usize,
    pub time: String,
    pub hero_id: i64,
    pub hero_name: String,
    pub hero_icon: String,
    pub kda: String,
    pub kills: u32,
    pub deaths: u32,
    pub assists: u32,
    pub score: String,
    pub score_band: ScoreBand,
    pub score_color: String,
    pub won: bool,
    /// `胜利` or `失败`.
    pub result: String,
    /// `win` or `lose`, used as the row's style class.
    pub result_class: String,
    pub mode: String,
}

/// Everything returned for one statistics query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleReport {
    pub category: String,
    pub total: usize,
    pub summary: BattleSummary,
    pub recent_games: Vec<GameRow>,
    pub modes_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
