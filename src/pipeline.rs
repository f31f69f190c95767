use crate::compression::decompress_payload;
use crate::decode::decode_payload;
use crate::error::NbtViewError;
use crate::nbt::NbtDocument;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// 负载解码器，将base64字符串还原为可读的NBT文本
///
/// 完整流程：base64解码 → 解压（自动识别gzip/zlib封装）→
/// 解压数据写入转储文件 → 重新打开并解析为NBT文档 → 渲染为SNBT。
pub struct PayloadDecoder {
    dump_path: Option<PathBuf>,
}

impl PayloadDecoder {
    /// 创建默认解码器，解压数据写入唯一命名、自动清理的临时文件
    pub fn new() -> Self {
        PayloadDecoder { dump_path: None }
    }

    /// 将解压数据持久化到指定路径，覆盖原有内容
    pub fn with_dump_path<P: AsRef<Path>>(path: P) -> Self {
        PayloadDecoder {
            dump_path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// 执行完整解码流程，返回SNBT渲染文本
    pub fn decode(&self, data: &str) -> Result<String, NbtViewError> {
        let decoded = decode_payload(data)?;
        let decompressed = decompress_payload(&decoded)?;

        let document = match &self.dump_path {
            Some(path) => {
                write_dump(path, &decompressed)?;
                parse_dump(path)?
            }
            None => {
                // 临时文件在解析完成前不能删除
                let mut tmp = NamedTempFile::new()?;
                tmp.write_all(&decompressed)?;
                tmp.flush()?;
                parse_dump(tmp.path())?
            }
        };

        Ok(document.render())
    }
}

impl Default for PayloadDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// 写入转储文件，写入完全结束后才允许读取
fn write_dump(path: &Path, data: &[u8]) -> Result<(), NbtViewError> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.flush()?;
    Ok(())
}

/// 重新打开转储文件并解析为NBT文档
fn parse_dump(path: &Path) -> Result<NbtDocument, NbtViewError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    NbtDocument::from_reader(&mut reader)
}
