use crate::error::{AppError, AppResult};
use crate::models::definition::{scalar_to_string, Page, PageDefinition, QuestionEntry};
use serde_yaml::Value;
use std::path::Path;
use tokio::fs;

/// 读取并解析单个输入文件
pub async fn load_definition(path: &Path) -> AppResult<PageDefinition> {
    let content = fs::read_to_string(path).await.map_err(|source| AppError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_definition(path, &content)
}

/// 将文件内容解析为 PageDefinition
///
/// 只检查遍历所需的结构：顶层为映射，每个页面的值为映射。
/// 题目元数据本身不做检查，交由转换阶段逐题处理，
/// 这样一道坏题目不会拖累整个文件。
///
/// `path` 仅用于错误信息。
pub fn parse_definition(path: &Path, content: &str) -> AppResult<PageDefinition> {
    let mut document: Value =
        serde_yaml::from_str(content).map_err(|e| AppError::parse(path, e.to_string()))?;
    // `<<: *anchor` 合并键展开为普通字段
    document
        .apply_merge()
        .map_err(|e| AppError::parse(path, e.to_string()))?;

    let root = match document {
        Value::Mapping(root) => root,
        other => {
            return Err(AppError::parse(
                path,
                format!("顶层应为映射，实际为 {}", describe(&other)),
            ))
        }
    };

    let mut pages = Vec::with_capacity(root.len());
    for (page_key, page_value) in root {
        let name = key_text(&page_key)
            .ok_or_else(|| AppError::parse(path, format!("页面名无法作为文本: {}", describe(&page_key))))?;

        let questions = match page_value {
            Value::Mapping(questions) => questions,
            other => {
                return Err(AppError::parse(
                    path,
                    format!("页面 '{}' 的值应为映射，实际为 {}", name, describe(&other)),
                ))
            }
        };

        let mut entries = Vec::with_capacity(questions.len());
        for (question_key, metadata) in questions {
            let text = key_text(&question_key).ok_or_else(|| {
                AppError::parse(
                    path,
                    format!("页面 '{}' 中的题目文本无法作为文本: {}", name, describe(&question_key)),
                )
            })?;
            entries.push(QuestionEntry { text, metadata });
        }

        pages.push(Page {
            name,
            questions: entries,
        });
    }

    Ok(PageDefinition { pages })
}

/// 映射键渲染为文本，空键 `~` 记为 "null"
fn key_text(key: &Value) -> Option<String> {
    match key {
        Value::Null => Some("null".to_string()),
        other => scalar_to_string(other),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "空值",
        Value::Bool(_) => "布尔值",
        Value::Number(_) => "数字",
        Value::String(_) => "字符串",
        Value::Sequence(_) => "列表",
        Value::Mapping(_) => "映射",
        Value::Tagged(_) => "带标签的值",
    }
}
