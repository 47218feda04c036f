use shanka_session::config::Config;
use shanka_session::error::SessionError;
use shanka_session::logging;
use shanka_session::session::Session;

use shanka_algo::types::QuizMode;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let _log_guard = logging::init_tracing(&config.log_level);

    let session = match Session::load(&config).await {
        Ok(session) => session,
        Err(err) => {
            tracing::error!(error = %err, "vocabulary data load failed");
            eprintln!("{}", SessionError::LOAD_FAILURE_MESSAGE);
            std::process::exit(1);
        }
    };

    tracing::info!(
        source = %config.data_source,
        card_mode = ?config.card_mode,
        groups = session.group_count(),
        "session ready"
    );

    for view in session.group_views() {
        tracing::info!(
            title = %view.title,
            cards = view.counts.unanswered,
            "group loaded"
        );
    }

    let sheet = session.build_quiz(QuizMode::Zh2En);
    tracing::info!(questions = sheet.len(), mode = sheet.mode.as_str(), "quiz sheet ready");
}
