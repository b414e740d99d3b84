//! 数据/控制包分类

use std::collections::HashSet;

/// 判定一个 enqueue 的包是数据还是控制开销
pub trait PacketClassifier: Send + Sync {
    fn is_data(&self, packet_type: &str) -> bool;
}

/// 按 packet_type 白名单分类（大小写敏感的精确匹配）
#[derive(Debug, Clone)]
pub struct TypeListClassifier {
    data_types: HashSet<String>,
}

impl TypeListClassifier {
    pub fn new<I, S>(data_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            data_types: data_types.into_iter().map(Into::into).collect(),
        }
    }
}

impl Default for TypeListClassifier {
    fn default() -> Self {
        Self::new(["tcp"])
    }
}

impl PacketClassifier for TypeListClassifier {
    fn is_data(&self, packet_type: &str) -> bool {
        self.data_types.contains(packet_type)
    }
}

impl<F> PacketClassifier for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_data(&self, packet_type: &str) -> bool {
        self(packet_type)
    }
}
