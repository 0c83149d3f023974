use super::*;

fn named(id: Option<&str>, name: &str) -> File {
    File {
        id: id.map(str::to_owned),
        name: Field::Present(name.to_owned()),
        rate: Rate::new(25),
        ..File::default()
    }
}

#[test]
fn insert_hands_out_sequential_ids() {
    let mut arena = FileArena::new();
    assert!(arena.is_empty());
    let a = arena.insert(named(Some("file-1"), "a.mov"));
    let b = arena.insert(named(None, "b.mov"));
    assert_eq!(a, FileId(0));
    assert_eq!(b, FileId(1));
    assert_eq!(arena.len(), 2);
    assert_eq!(arena.get(b).unwrap().name.get(), "b.mov");
    assert!(arena.get(FileId(9)).is_none());
}

#[test]
fn find_by_id_attribute() {
    let mut arena = FileArena::new();
    arena.insert(named(None, "anon.mov"));
    let a = arena.insert(named(Some("file-1"), "a.mov"));
    assert_eq!(arena.find("file-1"), Some(a));
    assert_eq!(arena.find("file-2"), None);
}

#[test]
fn iter_pairs_handles_with_files() {
    let mut arena = FileArena::new();
    arena.insert(named(Some("x"), "x.wav"));
    arena.get_mut(FileId(0)).unwrap().duration = Field::Present(10);
    let all: Vec<_> = arena.iter().collect();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].0, FileId(0));
    assert_eq!(all[0].1.duration.get(), 10);
}
