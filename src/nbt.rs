// NBT内容本身由quartz_nbt解析，这里只封装文档的读取与文本渲染

use crate::error::NbtViewError;
use quartz_nbt::io::{read_nbt, Flavor};
use quartz_nbt::NbtCompound;
use std::io::Read;

/// 解析后的NBT文档，持有根复合标签及其名称
#[derive(Debug)]
pub struct NbtDocument {
    pub root: NbtCompound,
    pub root_name: String,
}

impl NbtDocument {
    /// 从未压缩的NBT字节流解析文档
    pub fn from_reader<R: Read>(reader: &mut R) -> Result<Self, NbtViewError> {
        let (root, root_name) = read_nbt(reader, Flavor::Uncompressed)?;
        Ok(NbtDocument { root, root_name })
    }

    /// 渲染为SNBT文本
    pub fn render(&self) -> String {
        self.root.to_snbt()
    }
}
