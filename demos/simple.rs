use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use nbtview::{NbtViewError, PayloadDecoder};
use quartz_nbt::compound;
use quartz_nbt::io::{write_nbt, Flavor};

fn main() -> Result<(), NbtViewError> {
    // 构造一个示例物品：带有自定义名称的钻石剑
    println!("创建示例物品...");
    let item = compound! {
        "id": "minecraft:diamond_sword",
        "Count": 1i8,
        "tag": {
            "display": { "Name": "Sharp Blade" },
            "Damage": 0i32
        }
    };

    // 按市场接口的格式封装：NBT序列化 → gzip压缩 → base64编码
    let mut compressed = Vec::new();
    write_nbt(&mut compressed, None, &item, Flavor::GzCompressed)?;
    let payload = STANDARD.encode(compressed);

    println!("base64负载: {}", payload);

    // 解码并渲染
    let rendering = PayloadDecoder::new().decode(&payload)?;
    println!("\n解码结果:");
    println!("{}", rendering);

    Ok(())
}
