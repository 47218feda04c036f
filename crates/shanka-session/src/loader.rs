//! 单字数据载入
//!
//! 系统唯一的外部数据入口：对一个 JSON 资源做一次只读获取。
//! 来源可以是 http(s) URL 或本地文件路径。任何失败都视为同一类
//! 载入错误，不重试、不做部分渲染，由调用方向用户呈现失败讯息。

use shanka_algo::types::WordGroup;
use tracing::{debug, info};

use crate::error::SessionResult;

/// 载入并解析单字分组数据。单次尝试。
pub async fn load_groups(source: &str) -> SessionResult<Vec<WordGroup>> {
    let groups = if is_http_source(source) {
        fetch_remote(source).await?
    } else {
        read_local(source).await?
    };

    let word_count: usize = groups.iter().map(|g| g.words.len()).sum();
    info!(source, groups = groups.len(), words = word_count, "vocabulary data loaded");
    Ok(groups)
}

fn is_http_source(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_remote(url: &str) -> SessionResult<Vec<WordGroup>> {
    debug!(url, "fetching vocabulary data");
    let response = reqwest::get(url).await?.error_for_status()?;
    Ok(response.json().await?)
}

async fn read_local(path: &str) -> SessionResult<Vec<WordGroup>> {
    debug!(path, "reading vocabulary data");
    let raw = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"title": "Unit 1", "words": [
            {"word": "happy", "def": "快樂的", "pos": "adj", "ipa": "/ˈhæpi/", "sentence": "I am happy."},
            {"word": "run", "def": "跑", "pos": "v.", "ipa": "/rʌn/", "sentence": "I run fast."}
        ]},
        {"title": "Unit 2", "words": []}
    ]"#;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_local_file() {
        let file = write_temp(SAMPLE);
        let groups = load_groups(file.path().to_str().unwrap()).await.unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].title, "Unit 1");
        assert_eq!(groups[0].words.len(), 2);
        assert_eq!(groups[0].words[1].def, "跑");
        assert!(groups[1].words.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_load_failure() {
        let err = load_groups("/definitely/not/there.json").await.unwrap_err();
        assert!(err.is_load_failure());
    }

    #[tokio::test]
    async fn test_malformed_json_is_load_failure() {
        let file = write_temp("{ not valid json ]");
        let err = load_groups(file.path().to_str().unwrap())
            .await
            .unwrap_err();
        assert!(err.is_load_failure());
    }

    #[test]
    fn test_source_kind_detection() {
        assert!(is_http_source("https://example.com/data.json"));
        assert!(is_http_source("http://localhost:3000/v.json"));
        assert!(!is_http_source("./data/vocabulary.json"));
        assert!(!is_http_source("httpdata.json"));
    }
}
