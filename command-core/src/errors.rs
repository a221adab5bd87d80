//! 错误集合(Errors)
//!
//! 以属性为键、保持插入顺序并去重的领域错误集合,
//! 支持消息本地化、批量追加与自其它来源的合并。
//!
use crate::command::DEFAULT_SCOPE;
use crate::record::RecordErrors;
use crate::resolver::MessageResolver;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// 单条领域错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    /// 机器可读错误码,供程序化处理
    pub code: String,
    /// 人类可读消息,可能经过本地化
    pub message: String,
}

impl ErrorEntry {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// 领域错误集合
///
/// - 属性迭代顺序为插入顺序;
/// - 同一属性下 `(code, message)` 完全相同的条目只保留一条;
/// - 消息解析未命中时退化为字面消息。
#[derive(Clone)]
pub struct Errors {
    scope: &'static str,
    resolver: Option<Arc<dyn MessageResolver>>,
    entries: Vec<(String, Vec<ErrorEntry>)>,
}

impl Errors {
    /// 创建空集合,`scope` 为消息解析作用域
    pub fn new(scope: &'static str) -> Self {
        Self {
            scope,
            resolver: None,
            entries: Vec::new(),
        }
    }

    pub(crate) fn set_resolver(&mut self, resolver: Arc<dyn MessageResolver>) {
        self.resolver = Some(resolver);
    }

    pub(crate) fn resolver(&self) -> Option<Arc<dyn MessageResolver>> {
        self.resolver.clone()
    }

    /// 消息解析作用域
    pub fn scope(&self) -> &'static str {
        self.scope
    }

    /// 追加一条错误
    ///
    /// `message_or_key` 先在作用域下尝试解析;未命中(或未配置解析器)时
    /// 以字面值充当消息。
    ///
    /// # 示例
    ///
    /// ```
    /// use command_core::errors::Errors;
    ///
    /// let mut errors = Errors::default();
    /// errors.add("attribute", "some_error", "some error description");
    /// errors.add("attribute", "some_error", "some error description");
    ///
    /// // 完全相同的条目静默去重
    /// assert_eq!(errors.get("attribute").len(), 1);
    /// assert_eq!(errors.get("attribute")[0].code, "some_error");
    /// ```
    pub fn add(&mut self, attribute: &str, code: &str, message_or_key: &str) {
        self.add_with(attribute, code, message_or_key, &[]);
    }

    /// 带插值参数的 [`add`](Self::add)
    pub fn add_with(
        &mut self,
        attribute: &str,
        code: &str,
        message_or_key: &str,
        params: &[(&str, &str)],
    ) {
        let message = self
            .resolver
            .as_ref()
            .and_then(|resolver| resolver.resolve(message_or_key, self.scope, params))
            .unwrap_or_else(|| message_or_key.to_string());
        self.push(attribute, ErrorEntry::new(code, message));
    }

    // 同一属性下 (code, message) 全同视为重复,静默忽略
    fn push(&mut self, attribute: &str, entry: ErrorEntry) {
        if let Some((_, entries)) = self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.as_str() == attribute)
        {
            if !entries.contains(&entry) {
                entries.push(entry);
            }
        } else {
            self.entries.push((attribute.to_string(), vec![entry]));
        }
    }

    /// 批量追加,保持每个属性下的输入顺序
    pub fn add_multiple<'a, I>(&mut self, errors: I)
    where
        I: IntoIterator<Item = (&'a str, Vec<(&'a str, &'a str)>)>,
    {
        for (attribute, entries) in errors {
            for (code, message_or_key) in entries {
                self.add(attribute, code, message_or_key);
            }
        }
    }

    /// 并入另一集合的全部条目,沿用同样的去重规则;不改动对方
    ///
    /// 对方条目的消息已解析完毕,按原样并入,不做二次解析。
    pub fn merge_from(&mut self, other: &Errors) {
        for (attribute, entries) in &other.entries {
            for entry in entries {
                self.push(attribute, entry.clone());
            }
        }
    }

    /// 自记录式来源(如校验结果)导入
    ///
    /// 将消息列表与并行的错误码列表按位置配对;
    /// 某位置缺少错误码时以消息本身充当。
    pub fn merge_from_record<R: RecordErrors>(&mut self, record: &R) {
        for attribute in record.attributes() {
            let messages = record.messages_for(&attribute);
            let codes = record.codes_for(&attribute);
            for (index, message) in messages.iter().enumerate() {
                let code = codes.get(index).map(String::as_str).unwrap_or(message);
                self.add(&attribute, code, message);
            }
        }
    }

    /// 清空集合
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// 某属性下的条目,不存在时为空切片
    pub fn get(&self, attribute: &str) -> &[ErrorEntry] {
        self.entries
            .iter()
            .find(|(existing, _)| existing.as_str() == attribute)
            .map(|(_, entries)| entries.as_slice())
            .unwrap_or(&[])
    }

    /// 某属性下是否存在携带指定错误码的条目
    pub fn contains(&self, attribute: &str, code: &str) -> bool {
        self.get(attribute).iter().any(|entry| entry.code == code)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 条目总数(跨属性)
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, entries)| entries.len()).sum()
    }

    /// 携带错误的属性,按插入顺序
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .map(|(attribute, _)| attribute.as_str())
    }

    /// 以 `(属性, 条目)` 形式迭代,按插入顺序
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ErrorEntry])> {
        self.entries
            .iter()
            .map(|(attribute, entries)| (attribute.as_str(), entries.as_slice()))
    }
}

impl Default for Errors {
    fn default() -> Self {
        Self::new(DEFAULT_SCOPE)
    }
}

impl fmt::Debug for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries.iter().map(|(attribute, entries)| (attribute, entries)))
            .finish()
    }
}

/// 相等:属性与其有序条目列表完全一致(作用域与解析器不参与比较)
impl PartialEq for Errors {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Errors {}

/// 序列化为 `属性 -> [条目]` 的映射,便于直接进入 API 负载
impl Serialize for Errors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (attribute, entries) in &self.entries {
            map.serialize_entry(attribute, entries)?;
        }
        map.end()
    }
}
