//! 语音播放序列队列
//!
//! 把「单词 → 逐字母拼读 → 例句」的播放链建模为显式的有序任务队列。
//! 实际的语音合成设备是黑盒：队列只往 [`SpeechCommand`] 通道里送段落，
//! 设备端播完一段后通过 oneshot 回执，队列再送下一段。
//!
//! 开始新序列会取代进行中的序列：旧的排程任务被中止，并先向设备发送
//! [`SpeechCommand::CancelAll`]。除此之外没有其他取消机制；播放中的
//! 忙碌状态通过 [`SpeechQueue::is_speaking`] 暴露给 UI 锁。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::config::SpeedControl;

/// 默认朗读语言
pub const DEFAULT_LANGUAGE: &str = "en-US";

// ==================== Data Structures ====================

/// 一段待合成的语音。
#[derive(Clone, Debug, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub lang: String,
    pub rate: f64,
}

impl Utterance {
    pub fn new(text: impl Into<String>, rate: f64) -> Self {
        Self {
            text: text.into(),
            lang: DEFAULT_LANGUAGE.to_string(),
            rate,
        }
    }
}

/// 发往语音设备的指令。
#[derive(Debug)]
pub enum SpeechCommand {
    /// 播放一段语音；设备播完（或失败）后应消费 `done` 发出回执。
    Speak {
        utterance: Utterance,
        done: oneshot::Sender<()>,
    },
    /// 立即停止当前播放并清空设备侧排队。
    CancelAll,
}

// ==================== Sequence Construction ====================

/// 一张卡片的完整播放序列：单词、逐字母拼读（较慢）、例句。
pub fn sequence_for(word: &str, sentence: &str, speed: &SpeedControl) -> Vec<Utterance> {
    let spelled = word
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        Utterance::new(word, speed.current()),
        Utterance::new(spelled, speed.spelling_rate()),
        Utterance::new(sentence, speed.current()),
    ]
}

// ==================== Speech Queue ====================

/// 有序播放队列。同一时刻至多一个序列在播；新序列取代旧序列。
pub struct SpeechQueue {
    device: mpsc::Sender<SpeechCommand>,
    speaking: Arc<AtomicBool>,
    active: Option<JoinHandle<()>>,
}

impl SpeechQueue {
    pub fn new(device: mpsc::Sender<SpeechCommand>) -> Self {
        Self {
            device,
            speaking: Arc::new(AtomicBool::new(false)),
            active: None,
        }
    }

    /// 建一条设备通道并返回挂在其上的队列，接收端交给设备驱动。
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<SpeechCommand>) {
        let (tx, rx) = mpsc::channel(capacity);
        (Self::new(tx), rx)
    }

    /// 播放一个序列，取代任何进行中的序列。
    pub fn play(&mut self, utterances: Vec<Utterance>) {
        self.supersede();
        self.speaking.store(true, Ordering::SeqCst);

        let device = self.device.clone();
        let speaking = Arc::clone(&self.speaking);
        self.active = Some(tokio::spawn(async move {
            for utterance in utterances {
                let (done, ack) = oneshot::channel();
                if device
                    .send(SpeechCommand::Speak { utterance, done })
                    .await
                    .is_err()
                {
                    break;
                }
                // 设备端中途关闭也结束序列
                if ack.await.is_err() {
                    break;
                }
            }
            speaking.store(false, Ordering::SeqCst);
        }));
    }

    /// 停止播放并清空状态。
    pub fn stop(&mut self) {
        self.supersede();
        self.speaking.store(false, Ordering::SeqCst);
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking.load(Ordering::SeqCst)
    }

    fn supersede(&mut self) {
        if let Some(task) = self.active.take() {
            task.abort();
        }
        // 满载时丢弃取消指令也无妨，设备马上会收到新序列
        let _ = self.device.try_send(SpeechCommand::CancelAll);
    }
}

// ==================== Tests ====================
