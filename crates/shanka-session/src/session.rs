//! 会话控制器
//!
//! 把原本散落的模块级可变状态（各组卡片状态、当前播放速率）收拢成一个
//! 显式的会话对象。所有状态变更都是对离散用户操作的同步响应：标记卡片、
//! 切换筛选、重置分组、提交测验、调整语速。渲染层拿到的是纯数据视图
//! ([`GroupView`])，每次状态变更后重新计算。

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use shanka_algo::deck::{Deck, DeckGroup, StatusCounts};
use shanka_algo::grading::Grader;
use shanka_algo::scoring::QuizSummary;
use shanka_algo::types::{AnswerStatus, QuizItem, QuizMode, WordGroup};

use crate::config::{CardDisplayMode, Config, SpeedControl};
use crate::error::{SessionError, SessionResult};
use crate::loader;
use crate::quiz::QuizSheet;
use crate::speech::{self, Utterance};

// ==================== Views ====================

/// 一个分组的渲染视图：纯数据，由当前状态推导。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GroupView {
    pub title: String,
    pub filter: AnswerStatus,
    pub counts: StatusCounts,
    /// 已作答部分的正确率（四舍五入百分比）
    pub accuracy: u32,
    /// 当前筛选下可见的卡片，按展示顺序
    pub cards: Vec<QuizItem>,
}

// ==================== Session ====================

/// 一次学习会话：持有卡片组状态、判分器、语速与随机源。
pub struct Session {
    raw_groups: Vec<WordGroup>,
    deck: Deck,
    grader: Grader,
    speed: SpeedControl,
    card_mode: CardDisplayMode,
    rng: ChaCha8Rng,
}

impl Session {
    /// 载入数据并建立会话。载入失败即终止，不做部分渲染。
    pub async fn load(config: &Config) -> SessionResult<Self> {
        let groups = loader::load_groups(&config.data_source).await?;
        Ok(Self::from_groups(
            groups,
            config.card_mode,
            ChaCha8Rng::from_entropy(),
        ))
    }

    /// 由已有分组数据建立会话；测试用固定种子的 RNG 以复现洗牌顺序。
    pub fn from_groups(
        groups: Vec<WordGroup>,
        card_mode: CardDisplayMode,
        mut rng: ChaCha8Rng,
    ) -> Self {
        let deck = Deck::new(groups.clone(), &mut rng);
        info!(groups = deck.len(), "session initialized");
        Self {
            raw_groups: groups,
            deck,
            grader: Grader::default(),
            speed: SpeedControl::default(),
            card_mode,
            rng,
        }
    }

    // ==================== Groups & Cards ====================

    pub fn group_count(&self) -> usize {
        self.deck.len()
    }

    pub fn card_mode(&self) -> CardDisplayMode {
        self.card_mode
    }

    fn group(&self, index: usize) -> SessionResult<&DeckGroup> {
        self.deck
            .get(index)
            .ok_or(SessionError::GroupOutOfRange(index))
    }

    fn group_mut(&mut self, index: usize) -> SessionResult<&mut DeckGroup> {
        self.deck
            .get_mut(index)
            .ok_or(SessionError::GroupOutOfRange(index))
    }

    /// 标记一张卡片答对或答错。重复标记直接覆盖。
    pub fn mark_card(&mut self, group: usize, id: usize, correct: bool) -> SessionResult<()> {
        let status = if correct {
            AnswerStatus::Correct
        } else {
            AnswerStatus::Incorrect
        };
        if self.group_mut(group)?.mark(id, status) {
            Ok(())
        } else {
            Err(SessionError::CardNotFound { group, id })
        }
    }

    /// 切换分组的状态筛选。纯视图操作。
    pub fn set_filter(&mut self, group: usize, filter: AnswerStatus) -> SessionResult<()> {
        self.group_mut(group)?.set_filter(filter);
        Ok(())
    }

    /// 重置分组：全部恢复未作答并重新洗牌。
    pub fn reset_group(&mut self, group: usize) -> SessionResult<()> {
        let rng = &mut self.rng;
        self.deck
            .get_mut(group)
            .ok_or(SessionError::GroupOutOfRange(group))?
            .reset(rng);
        info!(group, "group reset");
        Ok(())
    }

    /// 当前状态下该分组的渲染视图。
    pub fn group_view(&self, index: usize) -> SessionResult<GroupView> {
        let group = self.group(index)?;
        Ok(GroupView {
            title: group.title.clone(),
            filter: group.filter(),
            counts: group.counts(),
            accuracy: group.accuracy(),
            cards: group.visible().into_iter().cloned().collect(),
        })
    }

    /// 所有分组的渲染视图。
    pub fn group_views(&self) -> Vec<GroupView> {
        (0..self.deck.len())
            .filter_map(|index| self.group_view(index).ok())
            .collect()
    }

    // ==================== Speech ====================

    pub fn speed(&self) -> f64 {
        self.speed.current()
    }

    pub fn speed_up(&mut self) -> f64 {
        self.speed.step_up()
    }

    pub fn speed_down(&mut self) -> f64 {
        self.speed.step_down()
    }

    /// 一张卡片的播放序列：单词、拼读、例句。
    pub fn speech_sequence(&self, group: usize, id: usize) -> SessionResult<Vec<Utterance>> {
        let deck_group = self.group(group)?;
        let item = deck_group
            .item(id)
            .ok_or(SessionError::CardNotFound { group, id })?;
        Ok(speech::sequence_for(
            &item.entry.word,
            &item.entry.sentence,
            &self.speed,
        ))
    }

    // ==================== Quiz ====================

    pub fn grader(&self) -> &Grader {
        &self.grader
    }

    /// 由当前数据生成一份测验卷。
    pub fn build_quiz(&self, mode: QuizMode) -> QuizSheet {
        QuizSheet::build(&self.raw_groups, mode)
    }

    /// 判分一份已作答的测验卷。
    pub fn submit_quiz(&self, sheet: &QuizSheet, responses: &[String]) -> QuizSummary {
        let summary = sheet.grade(responses, &self.grader);
        info!(
            correct = summary.correct,
            attempted = summary.attempted,
            percentage = summary.percentage(),
            "quiz graded"
        );
        summary
    }
}

// ==================== Tests ====================
