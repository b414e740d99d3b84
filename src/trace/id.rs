//! 标识符类型
//!
//! 定义节点和数据包的唯一标识符。

use serde::{Deserialize, Serialize};

/// 节点标识符（trace 中的 from_node / to_node 列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

/// 数据包标识符（关联键，trace 最后一列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PacketId(pub i64);
