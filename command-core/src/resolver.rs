//! 消息解析器(MessageResolver)
//!
//! 将错误消息键在给定作用域下解析为人类可读文案的协作者接口。
//! 未配置解析器或键不存在时,错误集合退化为直接使用字面消息。
//!
use std::collections::HashMap;

/// 消息解析协作者
///
/// 实现方对未知键必须返回 `None`,而非失败;
/// 核心将"未命中"视为"以字面键充当消息"。
pub trait MessageResolver: Send + Sync {
    /// 在 `scope` 作用域下解析 `key`,`params` 为插值参数
    fn resolve(&self, key: &str, scope: &str, params: &[(&str, &str)]) -> Option<String>;
}

/// 基于内存表的解析器实现
///
/// 以 `(scope, key)` 为索引存放模板,模板中的 `%{name}` 占位符
/// 在解析时被同名参数替换。适用于测试与小型应用。
///
/// # 示例
///
/// ```
/// use command_core::resolver::{MessageResolver, StaticMessageResolver};
///
/// let resolver = StaticMessageResolver::new()
///     .insert("errors.messages", "taken", "%{value} is already taken");
///
/// let message = resolver.resolve("taken", "errors.messages", &[("value", "sunny")]);
/// assert_eq!(message.as_deref(), Some("sunny is already taken"));
/// assert_eq!(resolver.resolve("unknown", "errors.messages", &[]), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticMessageResolver {
    templates: HashMap<(String, String), String>,
}

impl StaticMessageResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册一条模板(链式)
    pub fn insert(mut self, scope: &str, key: &str, template: &str) -> Self {
        self.templates
            .insert((scope.to_string(), key.to_string()), template.to_string());
        self
    }
}

impl MessageResolver for StaticMessageResolver {
    fn resolve(&self, key: &str, scope: &str, params: &[(&str, &str)]) -> Option<String> {
        let template = self.templates.get(&(scope.to_string(), key.to_string()))?;
        let mut message = template.clone();
        for (name, value) in params {
            message = message.replace(&format!("%{{{name}}}"), value);
        }
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 命中时返回模板文案
    #[test]
    fn test_resolve_hit() {
        let resolver =
            StaticMessageResolver::new().insert("errors.messages", "invalid", "is invalid");

        assert_eq!(
            resolver.resolve("invalid", "errors.messages", &[]),
            Some("is invalid".to_string())
        );
    }

    // 未知键返回 None,而非失败
    #[test]
    fn test_resolve_miss() {
        let resolver = StaticMessageResolver::new();
        assert_eq!(resolver.resolve("invalid", "errors.messages", &[]), None);
    }

    // 同名键在不同作用域下互不干扰
    #[test]
    fn test_resolve_scoped() {
        let resolver = StaticMessageResolver::new()
            .insert("errors.messages", "bad_post_code", "Bad error message")
            .insert("my.custom.scope", "bad_post_code", "Correct error message");

        assert_eq!(
            resolver.resolve("bad_post_code", "my.custom.scope", &[]),
            Some("Correct error message".to_string())
        );
        assert_eq!(
            resolver.resolve("bad_post_code", "errors.messages", &[]),
            Some("Bad error message".to_string())
        );
    }

    // %{name} 占位符被同名参数替换
    #[test]
    fn test_resolve_interpolation() {
        let resolver = StaticMessageResolver::new().insert(
            "errors.messages",
            "too_long",
            "%{field} is over %{max} characters",
        );

        assert_eq!(
            resolver.resolve(
                "too_long",
                "errors.messages",
                &[("field", "name"), ("max", "80")]
            ),
            Some("name is over 80 characters".to_string())
        );
    }
}
