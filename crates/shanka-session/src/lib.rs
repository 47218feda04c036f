//! # shanka-session - 闪卡会话层
//!
//! 在 [`shanka_algo`] 的纯算法之上提供一次学习会话所需的外围设施：
//!
//! - [`config`] - 环境变量配置与播放速率控制
//! - [`logging`] - tracing 日志初始化
//! - [`loader`] - 单字数据的单次只读载入（本地文件或 HTTP）
//! - [`session`] - 会话控制器：卡片状态、筛选、重置、测验、语速
//! - [`quiz`] - 测验卷构建与判分
//! - [`speech`] - 语音播放序列队列（新序列取代旧序列）
//! - [`error`] - 会话层错误类型

pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod quiz;
pub mod session;
pub mod speech;

pub use config::{CardDisplayMode, Config, SpeedControl};
pub use error::{SessionError, SessionResult};
pub use quiz::{QuizQuestion, QuizSheet};
pub use session::{GroupView, Session};
pub use speech::{sequence_for, SpeechCommand, SpeechQueue, Utterance};
