use super::*;

#[test]
fn plain_fields_accept_only_their_tag() {
    let a = aliases(Entity::Clip, "name");
    assert_eq!(a.canonical, "name");
    assert!(a.legacy.is_empty());
    assert!(a.accepts("name"));
    assert!(!a.accepts("Name"));
}

#[test]
fn legacy_spellings_follow_the_canonical_tag() {
    let a = aliases(Entity::ClipItem, "subclipinfo");
    assert_eq!(a.tags().collect::<Vec<_>>(), vec!["subclipinfo", "sublipinfo"]);

    let a = aliases(Entity::Sequence, "pixelaspectratio");
    assert!(a.accepts("pixelAspectRatio"));

    assert!(aliases(Entity::Link, "linkclipref").accepts("linkclippref"));

    for entity in [Entity::Sequence, Entity::Clip, Entity::ClipItem] {
        assert!(aliases(entity, "logginginfo").accepts("descriptionlogginginfo"));
    }
}

#[test]
fn aliases_are_scoped_to_their_entity() {
    assert!(!aliases(Entity::Clip, "subclipinfo").accepts("sublipinfo"));
    assert!(!aliases(Entity::Clip, "comments").accepts("comment"));
    assert!(aliases(Entity::Sequence, "comments").accepts("comment"));
}
