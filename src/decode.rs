use crate::error::NbtViewError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// 解码base64负载字符串
pub fn decode_payload(data: &str) -> Result<Vec<u8>, NbtViewError> {
    let bytes = STANDARD.decode(data)?;
    Ok(bytes)
}
