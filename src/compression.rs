use crate::{error::NbtViewError, StreamFormat, GZIP_MAGIC};
use flate2::read::{GzDecoder, ZlibDecoder};
use std::io::Read;

/// 识别压缩流封装格式
///
/// 以gzip魔数区分gzip封装与原始zlib流；无法识别时按zlib处理，
/// 由解压阶段报告具体错误。
pub fn detect_format(data: &[u8]) -> StreamFormat {
    if data.len() >= 2 && &data[..2] == GZIP_MAGIC {
        StreamFormat::Gzip
    } else {
        StreamFormat::Zlib
    }
}

/// 解压数据，同时接受gzip封装与原始zlib流
pub fn decompress_payload(data: &[u8]) -> Result<Vec<u8>, NbtViewError> {
    let mut decompressed = Vec::new();

    match detect_format(data) {
        StreamFormat::Gzip => {
            let mut decoder = GzDecoder::new(data);
            decoder
                .read_to_end(&mut decompressed)
                .map_err(|e| NbtViewError::Decompress(e.to_string()))?;
        }

        StreamFormat::Zlib => {
            let mut decoder = ZlibDecoder::new(data);
            decoder
                .read_to_end(&mut decompressed)
                .map_err(|e| NbtViewError::Decompress(e.to_string()))?;
        }
    }

    Ok(decompressed)
}
