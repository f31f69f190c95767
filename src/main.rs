use clap::Parser;
use nbtview::{NbtViewError, PayloadDecoder};
use std::io::Write;
use std::path::PathBuf;

/// NBTView命令行工具 - 解码base64/zlib封装的NBT物品数据
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// base64编码的负载字符串
    data: String,

    /// 解压数据的持久化路径（默认写入自动清理的临时文件）
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    // 任一阶段失败都打印统一格式的错误信息，并以非零状态退出
    if let Err(e) = run() {
        eprintln!("Error processing data: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), NbtViewError> {
    let cli = Cli::parse();

    let decoder = match &cli.output {
        Some(path) => PayloadDecoder::with_dump_path(path),
        None => PayloadDecoder::new(),
    };

    let rendering = decoder.decode(&cli.data)?;

    // 即使输出被管道接收也立即可见
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", rendering)?;
    stdout.flush()?;

    Ok(())
}
