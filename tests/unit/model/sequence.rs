use super::*;
use crate::model::media::{Audio, Video};

fn item(name: &str) -> ClipItem {
    ClipItem {
        name: Field::Present(name.to_string()),
        ..ClipItem::default()
    }
}

fn track(names: &[&str]) -> Track {
    Track {
        clip_items: names.iter().map(|n| item(n)).collect(),
        ..Track::default()
    }
}

#[test]
fn clip_items_walks_video_then_audio() {
    let seq = Sequence {
        media: Field::Present(Media {
            video: Field::Present(Video {
                tracks: vec![track(&["v1a", "v1b"]), track(&["v2a"])],
                ..Video::default()
            }),
            audio: Field::Present(Audio {
                tracks: vec![track(&["a1a"])],
                ..Audio::default()
            }),
            ..Media::default()
        }),
        ..Sequence::default()
    };
    let names: Vec<String> = seq.clip_items().map(|c| c.name.get()).collect();
    assert_eq!(names, vec!["v1a", "v1b", "v2a", "a1a"]);
}

#[test]
fn clip_items_of_sequence_without_media_is_empty() {
    assert_eq!(Sequence::default().clip_items().count(), 0);
}

#[test]
fn nesting_depth_counts_direct_and_compound_children() {
    let leaf = Sequence::default();
    assert_eq!(leaf.nesting_depth(), 1);

    let mut compound = item("compound");
    compound.sequence = Field::Present(Box::new(Sequence {
        sequences: vec![Sequence::default()],
        ..Sequence::default()
    }));
    let root = Sequence {
        sequences: vec![Sequence::default()],
        media: Field::Present(Media {
            video: Field::Present(Video {
                tracks: vec![Track {
                    clip_items: vec![compound],
                    ..Track::default()
                }],
                ..Video::default()
            }),
            ..Media::default()
        }),
        ..Sequence::default()
    };
    assert_eq!(root.nesting_depth(), 3);
}
