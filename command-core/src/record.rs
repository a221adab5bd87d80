//! 记录式错误来源(RecordErrors)
//!
//! 面向"校验结果"一类外部对象的导入接口:对象按属性暴露消息列表
//! 与并行的错误码列表,两者按位置配对后并入错误集合,
//! 见 [`Errors::merge_from_record`](crate::errors::Errors::merge_from_record)。
//!
/// 可被合并进错误集合的外部错误来源
pub trait RecordErrors {
    /// 携带错误的属性,按出现顺序
    fn attributes(&self) -> Vec<String>;

    /// 某属性下的消息列表
    fn messages_for(&self, attribute: &str) -> Vec<String>;

    /// 某属性下与消息并行的错误码列表
    ///
    /// 允许比消息列表短:缺位处以消息本身充当错误码。
    fn codes_for(&self, attribute: &str) -> Vec<String>;
}
