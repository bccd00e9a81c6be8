use digest::Digest;
use md5::Md5;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Streaming MD5 of a file's full byte content, rendered as lowercase hex.
///
/// The catalog index format declares MD5 digests for its records, so this is
/// the one algorithm the mirror verifies against.
pub async fn md5_hex(path: &Path) -> Result<String, std::io::Error> {
    let file = tokio::fs::File::open(path).await?;
    let mut reader = tokio::io::BufReader::new(file);
    let mut hasher = Md5::new();
    let mut buffer = vec![0u8; 65536]; // 64KB buffer for reading chunks

    loop {
        let bytes_read = reader.read(&mut buffer).await?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hex::encode(hasher.finalize()))
}
