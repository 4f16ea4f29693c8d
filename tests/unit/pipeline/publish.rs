use super::*;
use crate::encode::png::OutputFormat;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "thumbkit_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn temp_files_in(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| p.to_string_lossy().ends_with(".tmp"))
        .collect()
}

fn encoded(bytes: &[u8]) -> EncodedImage {
    EncodedImage {
        bytes: bytes.to_vec(),
        format: OutputFormat::Png,
    }
}

#[test]
fn publish_writes_file_and_leaves_no_temp() {
    let dir = temp_dir("publish_ok");
    let out = dir.join("nested").join("thumb.png");
    publish(&out, &encoded(b"abc")).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), b"abc");

    assert!(temp_files_in(out.parent().unwrap()).is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn publish_replaces_existing_file() {
    let dir = temp_dir("publish_replace");
    let out = dir.join("thumb.png");
    std::fs::write(&out, b"old").unwrap();
    publish(&out, &encoded(b"new")).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), b"new");
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn publish_onto_a_directory_fails_and_cleans_up() {
    let dir = temp_dir("publish_dir");
    let out = dir.join("taken");
    std::fs::create_dir_all(out.join("child")).unwrap();
    assert!(publish(&out, &encoded(b"x")).is_err());
    assert!(temp_files_in(&dir).is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn remove_best_effort_ignores_missing_files() {
    let dir = temp_dir("remove_missing");
    let p = dir.join("gone.jpg");
    remove_best_effort(&p);
    std::fs::write(&p, b"x").unwrap();
    remove_best_effort(&p);
    assert!(!p.exists());
    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn temp_sibling_stays_in_the_same_directory() {
    let p = Path::new("/a/b/out.png");
    let t = temp_sibling(p);
    assert_eq!(t.parent(), p.parent());
    assert!(t.file_name().unwrap().to_string_lossy().starts_with(".out.png."));
    assert_ne!(temp_sibling(p), temp_sibling(p));
}

#[test]
fn concurrent_publishes_to_one_path_do_not_collide() {
    let dir = temp_dir("publish_concurrent");
    let out = dir.join("shared.png");
    let payloads: Vec<Vec<u8>> = (0..8u8).map(|i| vec![i; 64 * 1024]).collect();

    std::thread::scope(|s| {
        for bytes in &payloads {
            let out = &out;
            s.spawn(move || publish(out, &encoded(bytes)).unwrap());
        }
    });

    let written = std::fs::read(&out).unwrap();
    assert!(payloads.contains(&written));
    assert!(temp_files_in(&dir).is_empty());
    std::fs::remove_dir_all(&dir).unwrap();
}
