//! # shanka-algo - 闪卡核心算法库
//!
//! 本 crate 提供纯 Rust 实现的词汇卡片核心逻辑:
//!
//! - **Answer Grading** - 开放式答案的归一化与模糊判分
//! - **Quiz Scoring** - 测验成绩的确定性聚合统计
//! - **Deck State Machine** - 卡片状态机 (未作答/正确/错误) 与筛选
//!
//! ## 设计理念
//!
//! - **纯函数** - 判分与统计无副作用，相同输入必得相同输出
//! - **可复现** - 洗牌接受外部 RNG，测试可用固定种子
//! - **可配置** - 重叠率阈值等启发式常量不硬编码
//!
//! ## 模块结构
//!
//! - [`grading`] - 答案归一化与判分 (英文/中文两种模式)
//! - [`scoring`] - 测验成绩聚合 (总分、分组明细、百分比)
//! - [`deck`] - 卡片组状态机 (标记、重置、筛选)
//! - [`types`] - 公共类型和常量
//!
//! ## 使用示例
//!
//! ```rust
//! use shanka_algo::{Grader, QuizMode};
//!
//! let grader = Grader::default();
//! assert!(grader.grade("Happy!", "happy", QuizMode::Zh2En));
//! assert!(!grader.grade("", "happy", QuizMode::Zh2En));
//! ```

// ============================================================================
// 模块声明
// ============================================================================

pub mod deck;
pub mod grading;
pub mod scoring;
pub mod types;

// ============================================================================
// 重新导出
// ============================================================================

/// 重新导出所有公共类型
pub use types::*;

/// 重新导出判分器
pub use grading::{normalize_en, normalize_zh, Grader, GraderOptions};

/// 重新导出成绩聚合
pub use scoring::{aggregate, percentage, GradedAnswer, GroupScore, QuizSummary, ResultBand};

/// 重新导出卡片组状态机
pub use deck::{Deck, DeckGroup, StatusCounts};
