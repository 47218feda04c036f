use thiserror::Error;

/// 会话层错误类型
///
/// 数据载入失败是唯一面向用户的错误：单次获取，不重试，不做部分渲染。
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("数据获取失败: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("数据读取失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("数据解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("组索引越界: {0}")]
    GroupOutOfRange(usize),

    #[error("卡片不存在: 组 {group} 中无 id {id}")]
    CardNotFound { group: usize, id: usize },
}

impl SessionError {
    /// 用户可见的载入失败讯息（对应前端的空状态文案）。
    pub const LOAD_FAILURE_MESSAGE: &'static str = "無法載入單字資料 (Failed to load vocabulary data)";

    /// 是否属于数据载入失败（获取、读取或解析）。
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            SessionError::Fetch(_) | SessionError::Io(_) | SessionError::Parse(_)
        )
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
