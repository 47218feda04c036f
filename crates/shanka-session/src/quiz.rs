//! 测验卷构建与判分
//!
//! 从单字分组生成一份测验卷：分组按标题排序，每个单字出一题。
//! `en2zh` 题干是英文单词、参考答案为中文释义；`zh2en` 题干是中文
//! 释义、参考答案为小写英文单词，并附「首字母...尾字母」提示。
//! 判分按题目位置配对作答，缺答视为空白（空白计入作答数且判错）。

use serde::{Deserialize, Serialize};

use shanka_algo::grading::Grader;
use shanka_algo::scoring::{aggregate, GradedAnswer, QuizSummary};
use shanka_algo::types::{PosType, QuizMode, WordGroup};

// ==================== Data Structures ====================

/// 测验卷中的一道题。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub group_title: String,
    /// 题干（单词或释义，取决于模式）
    pub prompt: String,
    /// 参考答案
    pub answer: String,
    /// 作答提示，仅 zh2en 模式提供
    pub hint: Option<String>,
    pub pos: String,
    pub pos_type: PosType,
}

/// 一份完整的测验卷。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizSheet {
    pub mode: QuizMode,
    pub questions: Vec<QuizQuestion>,
}

// ==================== Construction ====================

impl QuizSheet {
    /// 由分组数据生成测验卷。分组按标题排序以保证出题顺序稳定。
    pub fn build(groups: &[WordGroup], mode: QuizMode) -> Self {
        let mut sorted: Vec<&WordGroup> = groups.iter().collect();
        sorted.sort_by(|a, b| a.title.cmp(&b.title));

        let mut questions = Vec::new();
        for group in sorted {
            for entry in &group.words {
                let (prompt, answer, hint) = match mode {
                    QuizMode::En2Zh => (entry.word.clone(), entry.def.trim().to_string(), None),
                    QuizMode::Zh2En => {
                        let answer = entry.word.to_lowercase();
                        (entry.def.clone(), answer.clone(), spelling_hint(&answer))
                    }
                };
                questions.push(QuizQuestion {
                    group_title: group.title.clone(),
                    prompt,
                    answer,
                    hint,
                    pos: entry.pos.clone(),
                    pos_type: PosType::classify(&entry.pos),
                });
            }
        }

        Self { mode, questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// 判分整份卷子。作答按位置与题目配对，缺答视为空白。
    pub fn grade(&self, responses: &[String], grader: &Grader) -> QuizSummary {
        let graded: Vec<GradedAnswer> = self
            .questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let user = responses.get(index).map(String::as_str).unwrap_or("");
                GradedAnswer {
                    group: question.group_title.clone(),
                    is_correct: grader.grade(user, &question.answer, self.mode),
                }
            })
            .collect();
        aggregate(&graded)
    }
}

/// 「首字母...尾字母」占位提示；空答案无提示。
fn spelling_hint(answer: &str) -> Option<String> {
    let first = answer.chars().next()?;
    let last = answer.chars().last()?;
    Some(format!("{first}...{last}"))
}

// ==================== Tests ====================
