use thiserror::Error;
use std::io;

#[derive(Error, Debug)]
pub enum NbtViewError {
    #[error("IO错误: {0}")]
    Io(#[from] io::Error),

    #[error("base64解码错误: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("解压错误: {0}")]
    Decompress(String),

    #[error("NBT解析错误: {0}")]
    Parse(#[from] quartz_nbt::io::NbtIoError),
}
