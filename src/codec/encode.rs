use std::collections::{HashMap, HashSet};
use std::ptr;

use crate::codec::nesting;
use crate::foundation::core::{Field, format_bool};
use crate::model::annotations::{
    Comments, FilmData, Labels, LoggingInfo, Marker, SourceTrack, SubClipInfo,
};
use crate::model::clip::{Clip, ClipItem, Link};
use crate::model::document::{Document, Payload};
use crate::model::effect::{
    BezierHandle, Effect, Filter, Interpolation, KeyFrame, Parameter, ValueEntry, ValueList,
};
use crate::model::extra::Extra;
use crate::model::file::{File, FileArena, FileId};
use crate::model::media::{
    AppSpecificData, Audio, Channel, Codec, Format, Group, Media, Outputs, SampleCharacteristics,
    Video,
};
use crate::model::sequence::{Sequence, Track};
use crate::model::timing::{Rate, TimeCode};
use crate::model::value::Value;
use crate::xml::tree::{Element, Node};

/// One encode pass.
pub(crate) struct Encoder<'d> {
    files: &'d FileArena,
    /// File fields that carry the full definition of their file.
    definitions: HashSet<*const Field<FileId>>,
    /// Nested sequences built ahead of their parents.
    built: HashMap<*const Sequence, Element>,
}

type Fill<'e, 'd, T> = &'e dyn Fn(&mut Encoder<'d>, &mut Element, &T);

impl<'d> Encoder<'d> {
    pub(crate) fn new(files: &'d FileArena) -> Self {
        Self {
            files,
            definitions: HashSet::new(),
            built: HashMap::new(),
        }
    }

    pub(crate) fn document(&mut self, doc: &Document) -> Element {
        let plan = nesting::plan(doc);
        self.definitions = plan.definitions;
        for seq in plan.sequences.into_iter().rev() {
            let mut el = Element::new("sequence");
            self.sequence(&mut el, seq);
            self.built.insert(ptr::from_ref(seq), el);
        }

        let mut root = Element::new("xmeml");
        root.set_attr("version", doc.version.to_string());
        match &doc.payload {
            Some(Payload::Clip(clip)) => {
                let mut el = Element::new("clip");
                self.clip(&mut el, clip);
                root.push(el);
            }
            Some(Payload::Sequence(seq)) => {
                let el = self.sequence_element(seq);
                root.push(el);
            }
            None => {}
        }
        append_extra(&mut root, &doc.extra);
        root
    }

    fn nested<T>(&mut self, el: &mut Element, tag: &str, field: &Field<T>, fill: Fill<'_, 'd, T>) {
        match field {
            Field::Absent => {}
            Field::Empty => el.push(Element::new(tag)),
            Field::Present(v) => {
                let mut child = Element::new(tag);
                fill(self, &mut child, v);
                el.push(child);
            }
        }
    }

    fn many<T>(&mut self, el: &mut Element, tag: &str, items: &[T], fill: Fill<'_, 'd, T>) {
        for item in items {
            let mut child = Element::new(tag);
            fill(self, &mut child, item);
            el.push(child);
        }
    }

    fn sequence_element(&mut self, s: &Sequence) -> Element {
        if let Some(el) = self.built.remove(&ptr::from_ref(s)) {
            return el;
        }
        let mut el = Element::new("sequence");
        self.sequence(&mut el, s);
        el
    }

    fn file(&mut self, el: &mut Element, field: &Field<FileId>) {
        match field {
            Field::Absent => {}
            Field::Empty => el.push(Element::new("file")),
            Field::Present(handle) => {
                let full = self.definitions.contains(&ptr::from_ref(field));
                let file = self.file_element(*handle, full);
                el.push(file);
            }
        }
    }

    /// `<file id=".."/>` unless `full`; files without an id are always written in full.
    fn file_element(&mut self, handle: FileId, full: bool) -> Element {
        let mut el = Element::new("file");
        let files = self.files;
        let Some(file) = files.get(handle) else {
            tracing::warn!(?handle, "file handle outside the arena");
            return el;
        };
        if let Some(id) = &file.id {
            el.set_attr("id", id.as_str());
            if !full {
                return el;
            }
        }
        self.file_definition(&mut el, file);
        el
    }

    fn file_definition(&mut self, el: &mut Element, f: &File) {
        text(el, "name", &f.name);
        text(el, "pathurl", &f.path_url);
        let mut rate = Element::new("rate");
        self.rate(&mut rate, &f.rate);
        el.push(rate);
        int(el, "duration", &f.duration);
        self.nested(el, "timecode", &f.timecode, &Self::timecode);
        self.nested(el, "media", &f.media, &Self::media);
        append_extra(el, &f.extra);
    }

    fn sequence(&mut self, el: &mut Element, s: &Sequence) {
        if let Some(id) = &s.id {
            el.set_attr("id", id.as_str());
        }
        leaf(el, "uuid", &s.uuid, |u| u.hyphenated().to_string());
        text(el, "updatebehavior", &s.update_behavior);
        text(el, "name", &s.name);
        int(el, "duration", &s.duration);
        self.nested(el, "rate", &s.rate, &Self::rate);
        int(el, "in", &s.in_point);
        int(el, "out", &s.out_point);
        self.nested(el, "timecode", &s.timecode, &Self::timecode);
        self.nested(el, "media", &s.media, &Self::media);
        self.many(el, "marker", &s.markers, &Self::marker);
        self.nested(el, "labels", &s.labels, &Self::labels);
        self.nested(el, "comments", &s.comments, &Self::comments);
        text(el, "masterclipid", &s.master_clip_id);
        boolean(el, "ismasterclip", &s.is_master_clip);
        self.nested(el, "logginginfo", &s.logging_info, &Self::logging_info);
        self.nested(el, "filmdata", &s.film_data, &Self::film_data);
        self.file(el, &s.file);
        text(el, "pixelaspectratio", &s.pixel_aspect_ratio);
        for nested in &s.sequences {
            let child = self.sequence_element(nested);
            el.push(child);
        }
        append_extra(el, &s.extra);
    }

    fn clip(&mut self, el: &mut Element, c: &Clip) {
        if let Some(id) = &c.id {
            el.set_attr("id", id.as_str());
        }
        text(el, "name", &c.name);
        int(el, "duration", &c.duration);
        self.nested(el, "rate", &c.rate, &Self::rate);
        int(el, "in", &c.in_point);
        int(el, "out", &c.out_point);
        text(el, "masterclipid", &c.master_clip_id);
        boolean(el, "ismasterclip", &c.is_master_clip);
        boolean(el, "enabled", &c.enabled);
        self.nested(el, "media", &c.media, &Self::media);
        self.many(el, "marker", &c.markers, &Self::marker);
        boolean(el, "anamorphic", &c.anamorphic);
        leaf(el, "alphatype", &c.alpha_type, |a| a.as_str().to_owned());
        boolean(el, "alphareverse", &c.alpha_reverse);
        self.nested(el, "labels", &c.labels, &Self::labels);
        self.nested(el, "comments", &c.comments, &Self::comments);
        self.many(el, "sourcetrack", &c.source_tracks, &Self::source_track);
        leaf(el, "compositemode", &c.composite_mode, |m| m.as_str().to_owned());
        self.nested(el, "subclipinfo", &c.subclip_info, &Self::subclip_info);
        self.many(el, "filter", &c.filters, &Self::filter);
        boolean(el, "stillframe", &c.still_frame);
        int(el, "stillframeoffset", &c.still_frame_offset);
        int(el, "startoffset", &c.start_offset);
        int(el, "endoffset", &c.end_offset);
        self.file(el, &c.file);
        self.nested(el, "logginginfo", &c.logging_info, &Self::logging_info);
        self.nested(el, "timecode", &c.timecode, &Self::timecode);
        append_extra(el, &c.extra);
    }

    fn clip_item(&mut self, el: &mut Element, c: &ClipItem) {
        if let Some(id) = &c.id {
            el.set_attr("id", id.as_str());
        }
        text(el, "name", &c.name);
        int(el, "duration", &c.duration);
        self.nested(el, "rate", &c.rate, &Self::rate);
        int(el, "in", &c.in_point);
        int(el, "out", &c.out_point);
        text(el, "masterclipid", &c.master_clip_id);
        boolean(el, "ismasterclip", &c.is_master_clip);
        boolean(el, "enabled", &c.enabled);
        int(el, "start", &c.start);
        int(el, "end", &c.end);
        self.many(el, "link", &c.links, &Self::link);
        int(el, "syncoffset", &c.sync_offset);
        self.nested(el, "logginginfo", &c.logging_info, &Self::logging_info);
        self.file(el, &c.file);
        self.nested(el, "timecode", &c.timecode, &Self::timecode);
        self.many(el, "marker", &c.markers, &Self::marker);
        boolean(el, "anamorphic", &c.anamorphic);
        leaf(el, "alphatype", &c.alpha_type, |a| a.as_str().to_owned());
        boolean(el, "alphareverse", &c.alpha_reverse);
        self.nested(el, "labels", &c.labels, &Self::labels);
        self.nested(el, "comments", &c.comments, &Self::comments);
        self.many(el, "sourcetrack", &c.source_tracks, &Self::source_track);
        leaf(el, "compositemode", &c.composite_mode, |m| m.as_str().to_owned());
        self.nested(el, "subclipinfo", &c.subclip_info, &Self::subclip_info);
        self.many(el, "filter", &c.filters, &Self::filter);
        boolean(el, "stillframe", &c.still_frame);
        int(el, "stillframeoffset", &c.still_frame_offset);
        match &c.sequence {
            Field::Absent => {}
            Field::Empty => el.push(Element::new("sequence")),
            Field::Present(nested) => {
                let child = self.sequence_element(nested);
                el.push(child);
            }
        }
        int(el, "startoffset", &c.start_offset);
        int(el, "endoffset", &c.end_offset);
        append_extra(el, &c.extra);
    }

    fn link(&mut self, el: &mut Element, l: &Link) {
        text(el, "linkclipref", &l.link_clip_ref);
        text(el, "mediatype", &l.media_type);
        int(el, "trackindex", &l.track_index);
        int(el, "clipindex", &l.clip_index);
        int(el, "groupindex", &l.group_index);
        append_extra(el, &l.extra);
    }

    fn media(&mut self, el: &mut Element, m: &Media) {
        self.nested(el, "video", &m.video, &Self::video);
        self.nested(el, "audio", &m.audio, &Self::audio);
        append_extra(el, &m.extra);
    }

    fn video(&mut self, el: &mut Element, v: &Video) {
        int(el, "duration", &v.duration);
        self.nested(
            el,
            "samplecharacteristics",
            &v.sample_characteristics,
            &Self::sample_characteristics,
        );
        self.nested(el, "format", &v.format, &Self::format);
        self.many(el, "track", &v.tracks, &Self::track);
        append_extra(el, &v.extra);
    }

    fn audio(&mut self, el: &mut Element, a: &Audio) {
        self.nested(el, "format", &a.format, &Self::format);
        self.nested(el, "outputs", &a.outputs, &Self::outputs);
        int(el, "in", &a.in_point);
        int(el, "out", &a.out_point);
        int(el, "channelcount", &a.channel_count);
        self.nested(
            el,
            "samplecharacteristics",
            &a.sample_characteristics,
            &Self::sample_characteristics,
        );
        int(el, "trackcount", &a.track_count);
        self.nested(el, "rate", &a.rate, &Self::rate);
        int(el, "duration", &a.duration);
        self.many(el, "track", &a.tracks, &Self::track);
        append_extra(el, &a.extra);
    }

    fn track(&mut self, el: &mut Element, t: &Track) {
        self.many(el, "clipitem", &t.clip_items, &Self::clip_item);
        boolean(el, "enabled", &t.enabled);
        boolean(el, "locked", &t.locked);
        append_extra(el, &t.extra);
    }

    fn sample_characteristics(&mut self, el: &mut Element, s: &SampleCharacteristics) {
        self.nested(el, "rate", &s.rate, &Self::rate);
        int(el, "width", &s.width);
        int(el, "height", &s.height);
        boolean(el, "anamorphic", &s.anamorphic);
        text(el, "pixelaspectratio", &s.pixel_aspect_ratio);
        text(el, "fielddominance", &s.field_dominance);
        int(el, "colordepth", &s.color_depth);
        self.nested(el, "codec", &s.codec, &Self::codec);
        int(el, "depth", &s.depth);
        int(el, "samplerate", &s.sample_rate);
        append_extra(el, &s.extra);
    }

    fn format(&mut self, el: &mut Element, f: &Format) {
        self.nested(
            el,
            "samplecharacteristics",
            &f.sample_characteristics,
            &Self::sample_characteristics,
        );
        self.nested(el, "appspecificdata", &f.app_specific_data, &Self::app_specific_data);
        append_extra(el, &f.extra);
    }

    fn codec(&mut self, el: &mut Element, c: &Codec) {
        text(el, "name", &c.name);
        self.nested(el, "appspecificdata", &c.app_specific_data, &Self::app_specific_data);
        append_extra(el, &c.extra);
    }

    fn outputs(&mut self, el: &mut Element, o: &Outputs) {
        self.many(el, "group", &o.groups, &Self::group);
        append_extra(el, &o.extra);
    }

    fn group(&mut self, el: &mut Element, g: &Group) {
        int(el, "index", &g.index);
        int(el, "numchannels", &g.num_channels);
        int(el, "downmix", &g.downmix);
        self.many(el, "channel", &g.channels, &Self::channel);
        append_extra(el, &g.extra);
    }

    fn channel(&mut self, el: &mut Element, c: &Channel) {
        int(el, "index", &c.index);
        append_extra(el, &c.extra);
    }

    fn app_specific_data(&mut self, el: &mut Element, a: &AppSpecificData) {
        text(el, "appname", &a.app_name);
        text(el, "appmanufacturer", &a.app_manufacturer);
        text(el, "appversion", &a.app_version);
        append_extra(el, &a.extra);
    }

    fn rate(&mut self, el: &mut Element, r: &Rate) {
        el.push(Element::with_text("timebase", r.timebase.to_string()));
        boolean(el, "ntsc", &r.ntsc);
        append_extra(el, &r.extra);
    }

    fn timecode(&mut self, el: &mut Element, t: &TimeCode) {
        self.nested(el, "rate", &t.rate, &Self::rate);
        text(el, "string", &t.string);
        int(el, "frame", &t.frame);
        text(el, "source", &t.source);
        text(el, "displayformat", &t.display_format);
        int(el, "field", &t.field);
        append_extra(el, &t.extra);
    }

    fn marker(&mut self, el: &mut Element, m: &Marker) {
        text(el, "name", &m.name);
        text(el, "comment", &m.comment);
        int(el, "in", &m.in_point);
        int(el, "out", &m.out_point);
        append_extra(el, &m.extra);
    }

    fn logging_info(&mut self, el: &mut Element, l: &LoggingInfo) {
        text(el, "description", &l.description);
        text(el, "scene", &l.scene);
        text(el, "shottake", &l.shot_take);
        text(el, "lognote", &l.log_note);
        boolean(el, "good", &l.good);
        append_extra(el, &l.extra);
    }

    fn labels(&mut self, el: &mut Element, l: &Labels) {
        text(el, "label", &l.label);
        text(el, "label2", &l.label2);
        append_extra(el, &l.extra);
    }

    fn comments(&mut self, el: &mut Element, c: &Comments) {
        text(el, "mastercomment1", &c.master_comment_1);
        text(el, "mastercomment2", &c.master_comment_2);
        text(el, "mastercomment3", &c.master_comment_3);
        text(el, "mastercomment4", &c.master_comment_4);
        text(el, "clipcommenta", &c.clip_comment_a);
        text(el, "clipcommentb", &c.clip_comment_b);
        append_extra(el, &c.extra);
    }

    fn source_track(&mut self, el: &mut Element, s: &SourceTrack) {
        text(el, "mediatype", &s.media_type);
        int(el, "trackindex", &s.track_index);
        append_extra(el, &s.extra);
    }

    fn subclip_info(&mut self, el: &mut Element, s: &SubClipInfo) {
        int(el, "startoffset", &s.start_offset);
        int(el, "endoffset", &s.end_offset);
        append_extra(el, &s.extra);
    }

    fn film_data(&mut self, el: &mut Element, f: &FilmData) {
        append_extra(el, &f.extra);
    }

    fn filter(&mut self, el: &mut Element, f: &Filter) {
        boolean(el, "enabled", &f.enabled);
        int(el, "start", &f.start);
        int(el, "end", &f.end);
        self.nested(el, "effect", &f.effect, &Self::effect);
        append_extra(el, &f.extra);
    }

    fn effect(&mut self, el: &mut Element, e: &Effect) {
        text(el, "name", &e.name);
        text(el, "effectid", &e.effect_id);
        text(el, "effectcategory", &e.effect_category);
        text(el, "effecttype", &e.effect_type);
        text(el, "mediatype", &e.media_type);
        self.many(el, "parameter", &e.parameters, &Self::parameter);
        append_extra(el, &e.extra);
    }

    fn parameter(&mut self, el: &mut Element, p: &Parameter) {
        text(el, "parameterid", &p.parameter_id);
        text(el, "name", &p.name);
        int(el, "valuemin", &p.value_min);
        int(el, "valuemax", &p.value_max);
        self.nested(el, "valuelist", &p.value_list, &Self::value_list);
        self.nested(el, "value", &p.value, &Self::value);
        self.many(el, "keyframe", &p.keyframes, &Self::keyframe);
        self.nested(el, "interpolation", &p.interpolation, &Self::interpolation);
        self.nested(el, "appspecificdata", &p.app_specific_data, &Self::app_specific_data);
        append_extra(el, &p.extra);
    }

    fn value_list(&mut self, el: &mut Element, v: &ValueList) {
        self.many(el, "valueentry", &v.entries, &Self::value_entry);
        append_extra(el, &v.extra);
    }

    fn value_entry(&mut self, el: &mut Element, v: &ValueEntry) {
        text(el, "name", &v.name);
        self.nested(el, "value", &v.value, &Self::value);
        append_extra(el, &v.extra);
    }

    fn keyframe(&mut self, el: &mut Element, k: &KeyFrame) {
        int(el, "when", &k.when);
        self.nested(el, "value", &k.value, &Self::value);
        self.nested(el, "interpolation", &k.interpolation, &Self::interpolation);
        text(el, "inscale", &k.in_scale);
        text(el, "outscale", &k.out_scale);
        self.nested(el, "inbez", &k.in_bez, &Self::bezier_handle);
        self.nested(el, "outbez", &k.out_bez, &Self::bezier_handle);
        append_extra(el, &k.extra);
    }

    fn bezier_handle(&mut self, el: &mut Element, b: &BezierHandle) {
        text(el, "horiz", &b.horiz);
        text(el, "vert", &b.vert);
        append_extra(el, &b.extra);
    }

    fn interpolation(&mut self, el: &mut Element, i: &Interpolation) {
        text(el, "name", &i.name);
        append_extra(el, &i.extra);
    }

    fn value(&mut self, el: &mut Element, v: &Value) {
        el.push_text(v.data.as_str());
        text(el, "red", &v.red);
        text(el, "green", &v.green);
        text(el, "blue", &v.blue);
        text(el, "alpha", &v.alpha);
        text(el, "horiz", &v.horiz);
        text(el, "vert", &v.vert);
        append_extra(el, &v.extra);
    }
}

fn leaf<T>(el: &mut Element, tag: &str, field: &Field<T>, show: impl FnOnce(&T) -> String) {
    match field {
        Field::Absent => {}
        Field::Empty => el.push(Element::new(tag)),
        Field::Present(v) => el.push(Element::with_text(tag, show(v))),
    }
}

fn text(el: &mut Element, tag: &str, field: &Field<String>) {
    leaf(el, tag, field, String::clone);
}

fn int(el: &mut Element, tag: &str, field: &Field<i64>) {
    leaf(el, tag, field, i64::to_string);
}

fn boolean(el: &mut Element, tag: &str, field: &Field<bool>) {
    leaf(el, tag, field, |b| format_bool(*b).to_owned());
}

fn append_extra(el: &mut Element, extra: &Extra) {
    for leaf in &extra.leaves {
        let target = el.children.iter_mut().find_map(|n| match n {
            Node::Element(child) if child.name == leaf.tag => Some(child),
            _ => None,
        });
        let Some(target) = target else {
            tracing::debug!(tag = %leaf.tag, "field is absent; dropping its markup");
            continue;
        };
        target.attributes.extend(leaf.attributes.iter().cloned());
        target
            .children
            .extend(leaf.elements.iter().cloned().map(Node::Element));
    }
    for (name, value) in &extra.attributes {
        el.set_attr(name.as_str(), value.as_str());
    }
    el.children
        .extend(extra.elements.iter().cloned().map(Node::Element));
    el.push_text(extra.text.as_str());
}

#[cfg(test)]
#[path = "../../tests/unit/codec/encode.rs"]
mod tests;
