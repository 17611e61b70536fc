use std::fs;
use std::path::Path;

const PLACEHOLDER_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8" /><title>Studium</title></head>
<body><p>The frontend bundle has not been built. Run <code>trunk build</code> in <code>frontend/</code>.</p></body>
</html>
"#;

fn main() {
    let out_dir = Path::new("static");
    let embedded_dir = out_dir.join("dist");
    let dist_dir = Path::new("../frontend/dist");

    if dist_dir.exists() {
        let _ = fs::remove_dir_all(out_dir);
        fs::create_dir_all(out_dir).expect("create static dir");
        fs_extra::dir::copy(
            dist_dir,
            out_dir,
            &fs_extra::dir::CopyOptions::new().overwrite(true).copy_inside(true),
        )
        .expect("copy frontend bundle");
    } else if !embedded_dir.join("index.html").exists() {
        fs::create_dir_all(&embedded_dir).expect("create static/dist");
        fs::write(embedded_dir.join("index.html"), PLACEHOLDER_INDEX).expect("write placeholder index");
    }
    println!("cargo:rerun-if-changed=../frontend/dist");
}
