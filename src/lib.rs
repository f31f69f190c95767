pub mod compression;
pub mod decode;
pub mod error;
pub mod nbt;
pub mod pipeline;

pub use crate::error::NbtViewError;
pub use crate::pipeline::PayloadDecoder;

/// 历史版本使用的固定转储文件名
pub const DEFAULT_DUMP_FILE: &str = "output.nbt";

/// gzip流魔数
pub const GZIP_MAGIC: &[u8; 2] = &[0x1f, 0x8b];

/// 压缩流封装格式枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamFormat {
    Gzip,
    Zlib,
}
