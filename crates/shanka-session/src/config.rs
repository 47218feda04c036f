use serde::{Deserialize, Serialize};

// ==================== Speed Control ====================

/// 语音播放速率边界与步长
pub const MIN_SPEED: f64 = 0.25;
pub const MAX_SPEED: f64 = 2.00;
pub const SPEED_STEP: f64 = 0.05;
pub const DEFAULT_SPEED: f64 = 0.70;

/// 拼读段速率下限
const MIN_SPELLING_RATE: f64 = 0.3;

/// 播放速率控制：按固定步长增减，边界处截断。
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct SpeedControl {
    current: f64,
}

impl Default for SpeedControl {
    fn default() -> Self {
        Self {
            current: DEFAULT_SPEED,
        }
    }
}

impl SpeedControl {
    pub fn new(speed: f64) -> Self {
        Self {
            current: speed.clamp(MIN_SPEED, MAX_SPEED),
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn step_up(&mut self) -> f64 {
        self.current = (self.current + SPEED_STEP).min(MAX_SPEED);
        self.current
    }

    pub fn step_down(&mut self) -> f64 {
        self.current = (self.current - SPEED_STEP).max(MIN_SPEED);
        self.current
    }

    /// 拼读段放慢 0.15，但不低于下限。
    pub fn spelling_rate(&self) -> f64 {
        (self.current - 0.15).max(MIN_SPELLING_RATE)
    }
}

// ==================== Card Display Mode ====================

/// 卡片正面先显示哪一侧。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardDisplayMode {
    #[default]
    EnglishFirst,
    ChineseFirst,
}

impl CardDisplayMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "english-first" => Some(CardDisplayMode::EnglishFirst),
            "chinese-first" => Some(CardDisplayMode::ChineseFirst),
            _ => None,
        }
    }
}

// ==================== Config ====================

#[derive(Debug, Clone)]
pub struct Config {
    /// 单字数据来源：本地路径或 http(s) URL
    pub data_source: String,
    /// 卡片显示模式
    pub card_mode: CardDisplayMode,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Self {
        let data_source =
            std::env::var("SHANKA_DATA").unwrap_or_else(|_| "./data/vocabulary.json".to_string());

        let card_mode = std::env::var("CARD_MODE")
            .ok()
            .and_then(|value| CardDisplayMode::from_str(&value))
            .unwrap_or_default();

        let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        Self {
            data_source,
            card_mode,
            log_level,
        }
    }
}

// ==================== Tests ====================
