//! Fake platform CLI and a tiny artifact server for command tests.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

/// Serves `routes` (path → (status, body)) until the process exits. Returns the base URL.
pub(super) fn serve(routes: HashMap<String, (u16, Vec<u8>)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let routes = Arc::new(routes);
    thread::spawn(move || {
        for mut stream in listener.incoming().flatten() {
            let mut buf = [0u8; 8192];
            let n = match stream.read(&mut buf) {
                Ok(0) | Err(_) => continue,
                Ok(n) => n,
            };
            let request = String::from_utf8_lossy(&buf[..n]);
            let target = request.split_whitespace().nth(1).unwrap_or("/");
            let path = target.split('?').next().unwrap_or("/");
            let (status, body) = routes
                .get(path)
                .cloned()
                .unwrap_or((404, b"not found".to_vec()));
            let head = format!(
                "HTTP/1.1 {} X\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
    });
    format!("http://127.0.0.1:{}", port)
}

/// Writes an executable `aws` stand-in: `list-functions` prints `listing`,
/// `get-function --function-name N` prints the quoted URL `<base>/N?X-Amz-Signature=x`.
#[cfg(unix)]
pub(super) fn fake_aws(dir: &Path, listing: &str, base: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("aws");
    let script = format!(
        "#!/bin/sh\ncase \"$2\" in\n  list-functions) echo '{listing}' ;;\n  get-function) echo \"\\\"{base}/$4?X-Amz-Signature=x\\\"\" ;;\n  *) exit 2 ;;\nesac\n"
    );
    std::fs::write(&path, script).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}
