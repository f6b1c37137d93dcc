use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// 一个输入文件解析后的内容：页面名 → (题目文本 → 题目元数据)
///
/// 保持文件中的原始顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDefinition {
    pub pages: Vec<Page>,
}

impl PageDefinition {
    /// 所有页面中的题目总数
    pub fn question_count(&self) -> usize {
        self.pages.iter().map(|p| p.questions.len()).sum()
    }
}

/// 页面：一组以题目文本为键的题目
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub name: String,
    pub questions: Vec<QuestionEntry>,
}

/// 页面中的一道题目
///
/// `metadata` 保持原样，是否为映射、是否含有标识字段到转换阶段才检查
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionEntry {
    pub text: String,
    pub metadata: Value,
}

/// 题目元数据记录，序列化时即为一个 YAML 映射
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct QuestionRecord(pub Mapping);

impl QuestionRecord {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// 按原始顺序返回所有字段名（非字符串键跳过）
    pub fn field_names(&self) -> Vec<&str> {
        self.0.keys().filter_map(|k| k.as_str()).collect()
    }
}

/// 题目转换结果：派生文件名 + 转换后的记录
#[derive(Debug, Clone, PartialEq)]
pub struct TransformedQuestion {
    pub filename: String,
    pub record: QuestionRecord,
}

/// 将标量值渲染为文本；数字和布尔值按字面量输出
pub(crate) fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
