//! 题目转换服务 - 业务能力层
//!
//! 只处理单个题目：派生文件名、去掉标识字段、写入题目文本

use crate::error::{AppError, AppResult};
use crate::models::definition::{scalar_to_string, QuestionRecord, TransformedQuestion};
use serde_yaml::Value;

/// 标识字段，其值决定输出文件名
pub const KEY_FIELD: &str = "key";
/// 注入的题目文本字段
pub const QUESTION_FIELD: &str = "question";
/// 输出文件扩展名
pub const OUTPUT_EXTENSION: &str = ".yml";

/// 题目转换服务
///
/// 注意：如果原记录已有 `question` 字段，会被题目文本直接覆盖，位置不变
#[derive(Debug, Clone, Copy)]
pub struct QuestionTransformer;

impl QuestionTransformer {
    pub fn new() -> Self {
        Self
    }

    /// 转换一道题目
    ///
    /// # 参数
    /// - `page`: 页面名（仅用于错误信息）
    /// - `question_text`: 题目文本（原嵌套键）
    /// - `metadata`: 题目元数据
    ///
    /// # 返回
    /// 返回派生文件名和转换后的记录
    pub fn transform(
        &self,
        page: &str,
        question_text: &str,
        metadata: &Value,
    ) -> AppResult<TransformedQuestion> {
        let Value::Mapping(fields) = metadata else {
            return Err(AppError::InvalidRecord {
                page: page.to_string(),
                question: question_text.to_string(),
            });
        };

        let key_value = fields.get(KEY_FIELD).ok_or_else(|| AppError::MissingKey {
            page: page.to_string(),
            question: question_text.to_string(),
        })?;
        let stem = file_stem(page, question_text, key_value)?;

        let mut record = fields.clone();
        record.shift_remove(KEY_FIELD);
        record.insert(
            Value::String(QUESTION_FIELD.to_string()),
            Value::String(question_text.to_string()),
        );

        Ok(TransformedQuestion {
            filename: format!("{}{}", stem, OUTPUT_EXTENSION),
            record: QuestionRecord(record),
        })
    }
}

impl Default for QuestionTransformer {
    fn default() -> Self {
        Self::new()
    }
}

/// 标识字段的值必须能安全地作为输出目录下的文件名
fn file_stem(page: &str, question_text: &str, value: &Value) -> AppResult<String> {
    let stem = scalar_to_string(value)
        .ok_or_else(|| AppError::invalid_key(page, question_text, "值不是字符串、数字或布尔值"))?;

    if stem.is_empty() {
        return Err(AppError::invalid_key(page, question_text, "值为空"));
    }
    if stem == "." || stem == ".." || stem.contains(['/', '\\']) {
        return Err(AppError::invalid_key(
            page,
            question_text,
            format!("'{}' 不能作为文件名", stem),
        ));
    }

    Ok(stem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(content: &str) -> Value {
        serde_yaml::from_str(content).unwrap()
    }

    #[test]
    fn moves_key_into_filename_and_injects_question_text() {
        let metadata = yaml("key: q1\ntext: hello\n");

        let result = QuestionTransformer::new()
            .transform("page", "What is your name?", &metadata)
            .unwrap();

        assert_eq!(result.filename, "q1.yml");
        assert!(!result.record.contains("key"));
        assert_eq!(result.record.field_names(), vec!["text", "question"]);
        assert_eq!(
            result.record.get("question"),
            Some(&Value::String("What is your name?".into()))
        );
        assert_eq!(result.record.get("text"), Some(&Value::String("hello".into())));
    }

    #[test]
    fn keeps_remaining_fields_in_original_order() {
        let metadata = yaml("type: text\nkey: q2\nhint: h\noptional: true\n");

        let result = QuestionTransformer::new().transform("p", "Q", &metadata).unwrap();

        assert_eq!(
            result.record.field_names(),
            vec!["type", "hint", "optional", "question"]
        );
    }

    #[test]
    fn existing_question_field_is_overwritten_in_place() {
        let metadata = yaml("question: old\nkey: q3\ntype: text\n");

        let result = QuestionTransformer::new()
            .transform("p", "New text", &metadata)
            .unwrap();

        assert_eq!(result.record.field_names(), vec!["question", "type"]);
        assert_eq!(
            result.record.get("question"),
            Some(&Value::String("New text".into()))
        );
    }

    #[test]
    fn numeric_key_becomes_filename() {
        let metadata = yaml("key: 17\n");

        let result = QuestionTransformer::new().transform("p", "Q", &metadata).unwrap();

        assert_eq!(result.filename, "17.yml");
    }

    #[test]
    fn missing_key_fails_only_this_question() {
        let metadata = yaml("text: hello\n");

        let err = QuestionTransformer::new()
            .transform("Contact", "What?", &metadata)
            .unwrap_err();

        match err {
            AppError::MissingKey { page, question } => {
                assert_eq!(page, "Contact");
                assert_eq!(question, "What?");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_keys_that_escape_the_output_directory() {
        let transformer = QuestionTransformer::new();

        for content in ["key: ../evil\n", "key: a/b\n", "key: ''\n", "key: ..\n", "key: ~\n", "key: [a]\n"] {
            let err = transformer.transform("p", "Q", &yaml(content)).unwrap_err();
            assert!(matches!(err, AppError::InvalidKey { .. }), "{content}");
        }
    }

    #[test]
    fn non_mapping_metadata_is_an_invalid_record() {
        let err = QuestionTransformer::new()
            .transform("p", "Q", &yaml("just text"))
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidRecord { .. }));
    }
}
