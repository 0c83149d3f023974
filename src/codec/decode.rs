use std::collections::{BTreeMap, HashMap};
use std::ptr;

use crate::codec::children::{Children, Match};
use crate::codec::nesting;
use crate::foundation::core::{Field, parse_bool, parse_int};
use crate::foundation::error::{FieldPath, XmemlError, XmemlResult};
use crate::foundation::options::DecodeOptions;
use crate::model::annotations::{
    Comments, FilmData, Labels, LoggingInfo, Marker, SourceTrack, SubClipInfo,
};
use crate::model::clip::{AlphaType, Clip, ClipItem, CompositeMode, Link};
use crate::model::document::{Document, Payload};
use crate::model::effect::{
    BezierHandle, Effect, Filter, Interpolation, KeyFrame, Parameter, ValueEntry, ValueList,
};
use crate::model::extra::{Extra, LeafExtra};
use crate::model::file::{File, FileArena, FileId};
use crate::model::media::{
    AppSpecificData, Audio, Channel, Codec, Format, Group, Media, Outputs, SampleCharacteristics,
    Video,
};
use crate::model::sequence::{Sequence, Track};
use crate::model::timing::{Rate, TimeCode};
use crate::model::value::Value;
use crate::schema::aliases::Entity;
use crate::xml::tree::Element;

/// One decode pass over an element tree.
pub(crate) struct Decoder<'o> {
    opts: &'o DecodeOptions,
    files: FileArena,
    file_index: HashMap<String, FileId>,
    /// Forward references still waiting for their definition.
    unresolved: BTreeMap<FileId, FieldPath>,
    /// Nested sequences decoded ahead of their parents.
    decoded: HashMap<*const Element, Sequence>,
}

impl<'o> Decoder<'o> {
    pub(crate) fn new(opts: &'o DecodeOptions) -> Self {
        Self {
            opts,
            files: FileArena::new(),
            file_index: HashMap::new(),
            unresolved: BTreeMap::new(),
            decoded: HashMap::new(),
        }
    }

    pub(crate) fn document(mut self, root: &Element) -> XmemlResult<Document> {
        if root.name != "xmeml" {
            return Err(XmemlError::malformed_xml(format!(
                "root element is <{}>, expected <xmeml>",
                root.name
            )));
        }
        let path = FieldPath::root("xmeml");
        let version = document_version(root, &path)?;

        let mut c = Children::new(Entity::Document, root, path.clone());
        let clip = c.take("clip");
        let sequence = c.take("sequence");
        if clip.is_some() && sequence.is_some() {
            return Err(XmemlError::malformed_field(
                &path,
                "document holds both a clip and a sequence",
            ));
        }

        for m in nesting::scan(root, self.opts.max_depth)?.into_iter().rev() {
            let key = ptr::from_ref(m.el);
            let seq = self.sequence_body(m)?;
            self.decoded.insert(key, seq);
        }

        let payload = match (clip, sequence) {
            (Some(m), None) => Some(Payload::Clip(self.clip(m)?)),
            (None, Some(m)) => Some(Payload::Sequence(self.sequence(m)?)),
            _ => None,
        };
        let extra = self.extra(root, &["version"], c);

        if let Some((handle, path)) = self.unresolved.iter().next() {
            let id = self
                .files
                .get(*handle)
                .and_then(|f| f.id.clone())
                .unwrap_or_default();
            return Err(XmemlError::malformed_field(
                path,
                format!("reference to undefined file id {id:?}"),
            ));
        }

        Ok(Document {
            version,
            files: self.files,
            payload,
            extra,
        })
    }

    // Field helpers.

    fn lenient(&self, path: &FieldPath, message: String) -> XmemlResult<()> {
        if self.opts.strict {
            return Err(XmemlError::malformed_field(path, message));
        }
        tracing::debug!(%path, "{message}; using the default");
        Ok(())
    }

    fn scalar<T: Default>(
        &self,
        m: &Match<'_>,
        parse: impl Fn(&str) -> Option<T>,
        expected: &str,
    ) -> XmemlResult<Field<T>> {
        if !m.el.has_text() {
            return Ok(Field::Empty);
        }
        let raw = m.el.text();
        match parse(&raw) {
            Some(v) => Ok(Field::Present(v)),
            None => {
                self.lenient(&m.path, format!("expected {expected}, found {raw:?}"))?;
                Ok(Field::Present(T::default()))
            }
        }
    }

    fn string(&self, c: &mut Children<'_>, tag: &'static str) -> Field<String> {
        c.take_leaf(tag).map_or(Field::Absent, |m| text_field(m.el))
    }

    fn int(&self, c: &mut Children<'_>, tag: &'static str) -> XmemlResult<Field<i64>> {
        match c.take_leaf(tag) {
            Some(m) => self.scalar(&m, parse_int, "an integer"),
            None => Ok(Field::Absent),
        }
    }

    fn boolean(&self, c: &mut Children<'_>, tag: &'static str) -> XmemlResult<Field<bool>> {
        match c.take_leaf(tag) {
            Some(m) => self.scalar(&m, parse_bool, "TRUE or FALSE"),
            None => Ok(Field::Absent),
        }
    }

    fn uuid(&self, c: &mut Children<'_>, tag: &'static str) -> XmemlResult<Field<uuid::Uuid>> {
        match c.take_leaf(tag) {
            Some(m) => self.scalar(&m, |s| uuid::Uuid::parse_str(s.trim()).ok(), "a uuid"),
            None => Ok(Field::Absent),
        }
    }

    fn token<T>(
        &self,
        c: &mut Children<'_>,
        tag: &'static str,
        parse: fn(&str) -> T,
        known: fn(&T) -> bool,
    ) -> XmemlResult<Field<T>> {
        let Some(m) = c.take_leaf(tag) else {
            return Ok(Field::Absent);
        };
        if !m.el.has_text() {
            return Ok(Field::Empty);
        }
        let raw = m.el.text();
        let v = parse(raw.trim());
        if !known(&v) {
            self.lenient(&m.path, format!("unknown {tag} {raw:?}"))?;
        }
        Ok(Field::Present(v))
    }

    fn required_int(&self, c: &mut Children<'_>, tag: &'static str) -> XmemlResult<i64> {
        let Some(m) = c.take_leaf(tag) else {
            return Err(XmemlError::malformed_field(
                &c.path().child(tag),
                "missing required element",
            ));
        };
        let raw = m.el.text();
        parse_int(&raw).ok_or_else(|| {
            XmemlError::malformed_field(&m.path, format!("expected an integer, found {raw:?}"))
        })
    }

    fn required<'a, T>(
        &mut self,
        c: &mut Children<'a>,
        tag: &'static str,
        f: impl FnOnce(&mut Self, Match<'a>) -> XmemlResult<T>,
    ) -> XmemlResult<T> {
        match c.take(tag) {
            Some(m) => f(self, m),
            None => Err(XmemlError::malformed_field(
                &c.path().child(tag),
                "missing required element",
            )),
        }
    }

    fn sub<'a, T>(
        &mut self,
        c: &mut Children<'a>,
        tag: &'static str,
        f: impl FnOnce(&mut Self, Match<'a>) -> XmemlResult<T>,
    ) -> XmemlResult<Field<T>> {
        match c.take(tag) {
            Some(m) => self.nested(m, f),
            None => Ok(Field::Absent),
        }
    }

    fn nested<'a, T>(
        &mut self,
        m: Match<'a>,
        f: impl FnOnce(&mut Self, Match<'a>) -> XmemlResult<T>,
    ) -> XmemlResult<Field<T>> {
        if m.el.is_bare() {
            return Ok(Field::Empty);
        }
        f(self, m).map(Field::Present)
    }

    fn many<'a, T>(
        &mut self,
        c: &mut Children<'a>,
        tag: &'static str,
        mut f: impl FnMut(&mut Self, Match<'a>) -> XmemlResult<T>,
    ) -> XmemlResult<Vec<T>> {
        c.take_all(tag).into_iter().map(|m| f(self, m)).collect()
    }

    fn extra(&self, el: &Element, known_attrs: &[&str], c: Children<'_>) -> Extra {
        let path = c.path().clone();
        let rest = c.rest();
        let attributes: Vec<(String, String)> = el
            .attributes
            .iter()
            .filter(|(k, _)| !known_attrs.contains(&k.as_str()))
            .cloned()
            .collect();
        if self.opts.preserve_unknown {
            return Extra {
                attributes,
                elements: rest.elements.into_iter().cloned().collect(),
                text: rest.text.concat(),
                leaves: rest
                    .leaves
                    .into_iter()
                    .map(|(tag, leaf)| LeafExtra {
                        tag: tag.to_owned(),
                        attributes: leaf.attributes.clone(),
                        elements: leaf.elements().cloned().collect(),
                    })
                    .collect(),
            };
        }
        if !rest.is_empty() || !attributes.is_empty() {
            tracing::debug!(
                %path,
                elements = rest.elements.len(),
                attributes = attributes.len(),
                text = rest.text.len(),
                leaves = rest.leaves.len(),
                "dropping unknown content"
            );
        }
        Extra::default()
    }

    // Files.

    fn file(&mut self, c: &mut Children<'_>) -> XmemlResult<Field<FileId>> {
        let Some(Match { el, path }) = c.take("file") else {
            return Ok(Field::Absent);
        };
        let id = el.attr("id");
        if el.children.is_empty() {
            let foreign = el.attributes.iter().filter(|(k, _)| k != "id").count();
            if foreign > 0 {
                tracing::debug!(
                    %path,
                    attributes = foreign,
                    "dropping attributes of a file reference"
                );
            }
            return Ok(match id {
                Some(id) => Field::Present(self.file_reference(id, path)),
                None => Field::Empty,
            });
        }

        let file = self.file_definition(el, &path)?;
        let Some(id) = file.id.clone() else {
            return Ok(Field::Present(self.files.insert(file)));
        };
        let Some(&handle) = self.file_index.get(&id) else {
            let handle = self.files.insert(file);
            self.file_index.insert(id, handle);
            return Ok(Field::Present(handle));
        };

        if self.unresolved.remove(&handle).is_some() {
            if let Some(slot) = self.files.get_mut(handle) {
                *slot = file;
            }
        } else if self.files.get(handle) == Some(&file) {
            tracing::debug!(%path, id = %id, "merged repeated file definition");
        } else {
            return Err(XmemlError::malformed_field(
                &path.attr("id"),
                format!("conflicting definitions of file {id:?}"),
            ));
        }
        Ok(Field::Present(handle))
    }

    fn file_reference(&mut self, id: &str, path: FieldPath) -> FileId {
        if let Some(&handle) = self.file_index.get(id) {
            return handle;
        }
        let handle = self.files.insert(File {
            id: Some(id.to_owned()),
            ..File::default()
        });
        self.file_index.insert(id.to_owned(), handle);
        self.unresolved.insert(handle, path);
        handle
    }

    fn file_definition(&mut self, el: &Element, path: &FieldPath) -> XmemlResult<File> {
        let mut c = Children::new(Entity::File, el, path.clone());
        Ok(File {
            id: el.attr("id").map(str::to_owned),
            name: self.string(&mut c, "name"),
            path_url: self.string(&mut c, "pathurl"),
            rate: self.required(&mut c, "rate", Self::rate)?,
            duration: self.int(&mut c, "duration")?,
            timecode: self.sub(&mut c, "timecode", Self::timecode)?,
            media: self.sub(&mut c, "media", Self::media)?,
            extra: self.extra(el, &["id"], c),
        })
    }

    // Sequences and clips.

    /// Sequences found by [`nesting::scan`] are already decoded.
    fn sequence(&mut self, m: Match<'_>) -> XmemlResult<Sequence> {
        match self.decoded.remove(&ptr::from_ref(m.el)) {
            Some(seq) => Ok(seq),
            None => self.sequence_body(m),
        }
    }

    fn sequence_body(&mut self, m: Match<'_>) -> XmemlResult<Sequence> {
        let mut c = Children::new(Entity::Sequence, m.el, m.path);
        Ok(Sequence {
            id: m.el.attr("id").map(str::to_owned),
            uuid: self.uuid(&mut c, "uuid")?,
            update_behavior: self.string(&mut c, "updatebehavior"),
            name: self.string(&mut c, "name"),
            duration: self.int(&mut c, "duration")?,
            rate: self.sub(&mut c, "rate", Self::rate)?,
            in_point: self.int(&mut c, "in")?,
            out_point: self.int(&mut c, "out")?,
            timecode: self.sub(&mut c, "timecode", Self::timecode)?,
            media: self.sub(&mut c, "media", Self::media)?,
            markers: self.many(&mut c, "marker", Self::marker)?,
            labels: self.sub(&mut c, "labels", Self::labels)?,
            comments: self.sequence_comments(&mut c)?,
            master_clip_id: self.string(&mut c, "masterclipid"),
            is_master_clip: self.boolean(&mut c, "ismasterclip")?,
            logging_info: self.sub(&mut c, "logginginfo", Self::logging_info)?,
            film_data: self.sub(&mut c, "filmdata", Self::film_data)?,
            file: self.file(&mut c)?,
            pixel_aspect_ratio: self.string(&mut c, "pixelaspectratio"),
            sequences: self.many(&mut c, "sequence", Self::sequence)?,
            extra: self.extra(m.el, &["id"], c),
        })
    }

    /// The flat legacy `<comment>` is read as the first master comment.
    fn sequence_comments(&mut self, c: &mut Children<'_>) -> XmemlResult<Field<Comments>> {
        match c.take("comments") {
            Some(m) if m.el.name == "comment" => Ok(Field::Present(Comments {
                master_comment_1: text_field(m.el),
                ..Comments::default()
            })),
            Some(m) => self.nested(m, Self::comments),
            None => Ok(Field::Absent),
        }
    }

    fn clip(&mut self, m: Match<'_>) -> XmemlResult<Clip> {
        let mut c = Children::new(Entity::Clip, m.el, m.path);
        Ok(Clip {
            id: m.el.attr("id").map(str::to_owned),
            name: self.string(&mut c, "name"),
            duration: self.int(&mut c, "duration")?,
            rate: self.sub(&mut c, "rate", Self::rate)?,
            in_point: self.int(&mut c, "in")?,
            out_point: self.int(&mut c, "out")?,
            master_clip_id: self.string(&mut c, "masterclipid"),
            is_master_clip: self.boolean(&mut c, "ismasterclip")?,
            enabled: self.boolean(&mut c, "enabled")?,
            media: self.sub(&mut c, "media", Self::media)?,
            markers: self.many(&mut c, "marker", Self::marker)?,
            anamorphic: self.boolean(&mut c, "anamorphic")?,
            alpha_type: self.token(&mut c, "alphatype", AlphaType::parse, AlphaType::is_known)?,
            alpha_reverse: self.boolean(&mut c, "alphareverse")?,
            labels: self.sub(&mut c, "labels", Self::labels)?,
            comments: self.sub(&mut c, "comments", Self::comments)?,
            source_tracks: self.many(&mut c, "sourcetrack", Self::source_track)?,
            composite_mode: self.token(
                &mut c,
                "compositemode",
                CompositeMode::parse,
                CompositeMode::is_known,
            )?,
            subclip_info: self.sub(&mut c, "subclipinfo", Self::subclip_info)?,
            filters: self.many(&mut c, "filter", Self::filter)?,
            still_frame: self.boolean(&mut c, "stillframe")?,
            still_frame_offset: self.int(&mut c, "stillframeoffset")?,
            start_offset: self.int(&mut c, "startoffset")?,
            end_offset: self.int(&mut c, "endoffset")?,
            file: self.file(&mut c)?,
            logging_info: self.sub(&mut c, "logginginfo", Self::logging_info)?,
            timecode: self.sub(&mut c, "timecode", Self::timecode)?,
            extra: self.extra(m.el, &["id"], c),
        })
    }

    fn clip_item(&mut self, m: Match<'_>) -> XmemlResult<ClipItem> {
        let mut c = Children::new(Entity::ClipItem, m.el, m.path);
        Ok(ClipItem {
            id: m.el.attr("id").map(str::to_owned),
            name: self.string(&mut c, "name"),
            duration: self.int(&mut c, "duration")?,
            rate: self.sub(&mut c, "rate", Self::rate)?,
            in_point: self.int(&mut c, "in")?,
            out_point: self.int(&mut c, "out")?,
            master_clip_id: self.string(&mut c, "masterclipid"),
            is_master_clip: self.boolean(&mut c, "ismasterclip")?,
            enabled: self.boolean(&mut c, "enabled")?,
            start: self.int(&mut c, "start")?,
            end: self.int(&mut c, "end")?,
            links: self.many(&mut c, "link", Self::link)?,
            sync_offset: self.int(&mut c, "syncoffset")?,
            logging_info: self.sub(&mut c, "logginginfo", Self::logging_info)?,
            file: self.file(&mut c)?,
            timecode: self.sub(&mut c, "timecode", Self::timecode)?,
            markers: self.many(&mut c, "marker", Self::marker)?,
            anamorphic: self.boolean(&mut c, "anamorphic")?,
            alpha_type: self.token(&mut c, "alphatype", AlphaType::parse, AlphaType::is_known)?,
            alpha_reverse: self.boolean(&mut c, "alphareverse")?,
            labels: self.sub(&mut c, "labels", Self::labels)?,
            comments: self.sub(&mut c, "comments", Self::comments)?,
            source_tracks: self.many(&mut c, "sourcetrack", Self::source_track)?,
            composite_mode: self.token(
                &mut c,
                "compositemode",
                CompositeMode::parse,
                CompositeMode::is_known,
            )?,
            subclip_info: self.sub(&mut c, "subclipinfo", Self::subclip_info)?,
            filters: self.many(&mut c, "filter", Self::filter)?,
            still_frame: self.boolean(&mut c, "stillframe")?,
            still_frame_offset: self.int(&mut c, "stillframeoffset")?,
            sequence: self.sub(&mut c, "sequence", |d, m| d.sequence(m).map(Box::new))?,
            start_offset: self.int(&mut c, "startoffset")?,
            end_offset: self.int(&mut c, "endoffset")?,
            extra: self.extra(m.el, &["id"], c),
        })
    }

    fn link(&mut self, m: Match<'_>) -> XmemlResult<Link> {
        let mut c = Children::new(Entity::Link, m.el, m.path);
        Ok(Link {
            link_clip_ref: self.string(&mut c, "linkclipref"),
            media_type: self.string(&mut c, "mediatype"),
            track_index: self.int(&mut c, "trackindex")?,
            clip_index: self.int(&mut c, "clipindex")?,
            group_index: self.int(&mut c, "groupindex")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    // Media.

    fn media(&mut self, m: Match<'_>) -> XmemlResult<Media> {
        let mut c = Children::new(Entity::Media, m.el, m.path);
        Ok(Media {
            video: self.sub(&mut c, "video", Self::video)?,
            audio: self.sub(&mut c, "audio", Self::audio)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn video(&mut self, m: Match<'_>) -> XmemlResult<Video> {
        let mut c = Children::new(Entity::Video, m.el, m.path);
        Ok(Video {
            duration: self.int(&mut c, "duration")?,
            sample_characteristics: self.sub(
                &mut c,
                "samplecharacteristics",
                Self::sample_characteristics,
            )?,
            format: self.sub(&mut c, "format", Self::format)?,
            tracks: self.many(&mut c, "track", Self::track)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn audio(&mut self, m: Match<'_>) -> XmemlResult<Audio> {
        let mut c = Children::new(Entity::Audio, m.el, m.path);
        Ok(Audio {
            format: self.sub(&mut c, "format", Self::format)?,
            outputs: self.sub(&mut c, "outputs", Self::outputs)?,
            in_point: self.int(&mut c, "in")?,
            out_point: self.int(&mut c, "out")?,
            channel_count: self.int(&mut c, "channelcount")?,
            sample_characteristics: self.sub(
                &mut c,
                "samplecharacteristics",
                Self::sample_characteristics,
            )?,
            track_count: self.int(&mut c, "trackcount")?,
            rate: self.sub(&mut c, "rate", Self::rate)?,
            duration: self.int(&mut c, "duration")?,
            tracks: self.many(&mut c, "track", Self::track)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn track(&mut self, m: Match<'_>) -> XmemlResult<Track> {
        let mut c = Children::new(Entity::Track, m.el, m.path);
        Ok(Track {
            clip_items: self.many(&mut c, "clipitem", Self::clip_item)?,
            enabled: self.boolean(&mut c, "enabled")?,
            locked: self.boolean(&mut c, "locked")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn sample_characteristics(&mut self, m: Match<'_>) -> XmemlResult<SampleCharacteristics> {
        let mut c = Children::new(Entity::SampleCharacteristics, m.el, m.path);
        Ok(SampleCharacteristics {
            rate: self.sub(&mut c, "rate", Self::rate)?,
            width: self.int(&mut c, "width")?,
            height: self.int(&mut c, "height")?,
            anamorphic: self.boolean(&mut c, "anamorphic")?,
            pixel_aspect_ratio: self.string(&mut c, "pixelaspectratio"),
            field_dominance: self.string(&mut c, "fielddominance"),
            color_depth: self.int(&mut c, "colordepth")?,
            codec: self.sub(&mut c, "codec", Self::codec)?,
            depth: self.int(&mut c, "depth")?,
            sample_rate: self.int(&mut c, "samplerate")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn format(&mut self, m: Match<'_>) -> XmemlResult<Format> {
        let mut c = Children::new(Entity::Format, m.el, m.path);
        Ok(Format {
            sample_characteristics: self.sub(
                &mut c,
                "samplecharacteristics",
                Self::sample_characteristics,
            )?,
            app_specific_data: self.sub(&mut c, "appspecificdata", Self::app_specific_data)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn codec(&mut self, m: Match<'_>) -> XmemlResult<Codec> {
        let mut c = Children::new(Entity::Codec, m.el, m.path);
        Ok(Codec {
            name: self.string(&mut c, "name"),
            app_specific_data: self.sub(&mut c, "appspecificdata", Self::app_specific_data)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn outputs(&mut self, m: Match<'_>) -> XmemlResult<Outputs> {
        let mut c = Children::new(Entity::Outputs, m.el, m.path);
        Ok(Outputs {
            groups: self.many(&mut c, "group", Self::group)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn group(&mut self, m: Match<'_>) -> XmemlResult<Group> {
        let mut c = Children::new(Entity::Group, m.el, m.path);
        Ok(Group {
            index: self.int(&mut c, "index")?,
            num_channels: self.int(&mut c, "numchannels")?,
            downmix: self.int(&mut c, "downmix")?,
            channels: self.many(&mut c, "channel", Self::channel)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn channel(&mut self, m: Match<'_>) -> XmemlResult<Channel> {
        let mut c = Children::new(Entity::Channel, m.el, m.path);
        Ok(Channel {
            index: self.int(&mut c, "index")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn app_specific_data(&mut self, m: Match<'_>) -> XmemlResult<AppSpecificData> {
        let mut c = Children::new(Entity::AppSpecificData, m.el, m.path);
        Ok(AppSpecificData {
            app_name: self.string(&mut c, "appname"),
            app_manufacturer: self.string(&mut c, "appmanufacturer"),
            app_version: self.string(&mut c, "appversion"),
            extra: self.extra(m.el, &[], c),
        })
    }

    // Timing.

    fn rate(&mut self, m: Match<'_>) -> XmemlResult<Rate> {
        let mut c = Children::new(Entity::Rate, m.el, m.path);
        Ok(Rate {
            timebase: self.required_int(&mut c, "timebase")?,
            ntsc: self.boolean(&mut c, "ntsc")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn timecode(&mut self, m: Match<'_>) -> XmemlResult<TimeCode> {
        let mut c = Children::new(Entity::TimeCode, m.el, m.path);
        Ok(TimeCode {
            rate: self.sub(&mut c, "rate", Self::rate)?,
            string: self.string(&mut c, "string"),
            frame: self.int(&mut c, "frame")?,
            source: self.string(&mut c, "source"),
            display_format: self.string(&mut c, "displayformat"),
            field: self.int(&mut c, "field")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    // Annotations.

    fn marker(&mut self, m: Match<'_>) -> XmemlResult<Marker> {
        let mut c = Children::new(Entity::Marker, m.el, m.path);
        Ok(Marker {
            name: self.string(&mut c, "name"),
            comment: self.string(&mut c, "comment"),
            in_point: self.int(&mut c, "in")?,
            out_point: self.int(&mut c, "out")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn logging_info(&mut self, m: Match<'_>) -> XmemlResult<LoggingInfo> {
        let mut c = Children::new(Entity::LoggingInfo, m.el, m.path);
        Ok(LoggingInfo {
            description: self.string(&mut c, "description"),
            scene: self.string(&mut c, "scene"),
            shot_take: self.string(&mut c, "shottake"),
            log_note: self.string(&mut c, "lognote"),
            good: self.boolean(&mut c, "good")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn labels(&mut self, m: Match<'_>) -> XmemlResult<Labels> {
        let mut c = Children::new(Entity::Labels, m.el, m.path);
        Ok(Labels {
            label: self.string(&mut c, "label"),
            label2: self.string(&mut c, "label2"),
            extra: self.extra(m.el, &[], c),
        })
    }

    fn comments(&mut self, m: Match<'_>) -> XmemlResult<Comments> {
        let mut c = Children::new(Entity::Comments, m.el, m.path);
        Ok(Comments {
            master_comment_1: self.string(&mut c, "mastercomment1"),
            master_comment_2: self.string(&mut c, "mastercomment2"),
            master_comment_3: self.string(&mut c, "mastercomment3"),
            master_comment_4: self.string(&mut c, "mastercomment4"),
            clip_comment_a: self.string(&mut c, "clipcommenta"),
            clip_comment_b: self.string(&mut c, "clipcommentb"),
            extra: self.extra(m.el, &[], c),
        })
    }

    fn source_track(&mut self, m: Match<'_>) -> XmemlResult<SourceTrack> {
        let mut c = Children::new(Entity::SourceTrack, m.el, m.path);
        Ok(SourceTrack {
            media_type: self.string(&mut c, "mediatype"),
            track_index: self.int(&mut c, "trackindex")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn subclip_info(&mut self, m: Match<'_>) -> XmemlResult<SubClipInfo> {
        let mut c = Children::new(Entity::SubClipInfo, m.el, m.path);
        Ok(SubClipInfo {
            start_offset: self.int(&mut c, "startoffset")?,
            end_offset: self.int(&mut c, "endoffset")?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn film_data(&mut self, m: Match<'_>) -> XmemlResult<FilmData> {
        let c = Children::new(Entity::FilmData, m.el, m.path);
        Ok(FilmData {
            extra: self.extra(m.el, &[], c),
        })
    }

    // Effects.

    fn filter(&mut self, m: Match<'_>) -> XmemlResult<Filter> {
        let mut c = Children::new(Entity::Filter, m.el, m.path);
        Ok(Filter {
            enabled: self.boolean(&mut c, "enabled")?,
            start: self.int(&mut c, "start")?,
            end: self.int(&mut c, "end")?,
            effect: self.sub(&mut c, "effect", Self::effect)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn effect(&mut self, m: Match<'_>) -> XmemlResult<Effect> {
        let mut c = Children::new(Entity::Effect, m.el, m.path);
        Ok(Effect {
            name: self.string(&mut c, "name"),
            effect_id: self.string(&mut c, "effectid"),
            effect_category: self.string(&mut c, "effectcategory"),
            effect_type: self.string(&mut c, "effecttype"),
            media_type: self.string(&mut c, "mediatype"),
            parameters: self.many(&mut c, "parameter", Self::parameter)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn parameter(&mut self, m: Match<'_>) -> XmemlResult<Parameter> {
        let mut c = Children::new(Entity::Parameter, m.el, m.path);
        Ok(Parameter {
            parameter_id: self.string(&mut c, "parameterid"),
            name: self.string(&mut c, "name"),
            value_min: self.int(&mut c, "valuemin")?,
            value_max: self.int(&mut c, "valuemax")?,
            value_list: self.sub(&mut c, "valuelist", Self::value_list)?,
            value: self.sub(&mut c, "value", Self::value)?,
            keyframes: self.many(&mut c, "keyframe", Self::keyframe)?,
            interpolation: self.sub(&mut c, "interpolation", Self::interpolation)?,
            app_specific_data: self.sub(&mut c, "appspecificdata", Self::app_specific_data)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn value_list(&mut self, m: Match<'_>) -> XmemlResult<ValueList> {
        let mut c = Children::new(Entity::ValueList, m.el, m.path);
        Ok(ValueList {
            entries: self.many(&mut c, "valueentry", Self::value_entry)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn value_entry(&mut self, m: Match<'_>) -> XmemlResult<ValueEntry> {
        let mut c = Children::new(Entity::ValueEntry, m.el, m.path);
        Ok(ValueEntry {
            name: self.string(&mut c, "name"),
            value: self.sub(&mut c, "value", Self::value)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn keyframe(&mut self, m: Match<'_>) -> XmemlResult<KeyFrame> {
        let mut c = Children::new(Entity::KeyFrame, m.el, m.path);
        Ok(KeyFrame {
            when: self.int(&mut c, "when")?,
            value: self.sub(&mut c, "value", Self::value)?,
            interpolation: self.sub(&mut c, "interpolation", Self::interpolation)?,
            in_scale: self.string(&mut c, "inscale"),
            out_scale: self.string(&mut c, "outscale"),
            in_bez: self.sub(&mut c, "inbez", Self::bezier_handle)?,
            out_bez: self.sub(&mut c, "outbez", Self::bezier_handle)?,
            extra: self.extra(m.el, &[], c),
        })
    }

    fn bezier_handle(&mut self, m: Match<'_>) -> XmemlResult<BezierHandle> {
        let mut c = Children::new(Entity::BezierHandle, m.el, m.path);
        Ok(BezierHandle {
            horiz: self.string(&mut c, "horiz"),
            vert: self.string(&mut c, "vert"),
            extra: self.extra(m.el, &[], c),
        })
    }

    fn interpolation(&mut self, m: Match<'_>) -> XmemlResult<Interpolation> {
        let mut c = Children::new(Entity::Interpolation, m.el, m.path);
        Ok(Interpolation {
            name: self.string(&mut c, "name"),
            extra: self.extra(m.el, &[], c),
        })
    }

    fn value(&mut self, m: Match<'_>) -> XmemlResult<Value> {
        let mut c = Children::new(Entity::Value, m.el, m.path);
        Ok(Value {
            data: c.take_text(),
            red: self.string(&mut c, "red"),
            green: self.string(&mut c, "green"),
            blue: self.string(&mut c, "blue"),
            alpha: self.string(&mut c, "alpha"),
            horiz: self.string(&mut c, "horiz"),
            vert: self.string(&mut c, "vert"),
            extra: self.extra(m.el, &[], c),
        })
    }
}

fn document_version(root: &Element, path: &FieldPath) -> XmemlResult<i64> {
    let path = path.attr("version");
    let raw = root
        .attr("version")
        .ok_or_else(|| XmemlError::malformed_field(&path, "missing required attribute"))?;
    parse_int(raw).ok_or_else(|| {
        XmemlError::malformed_field(&path, format!("expected an integer, found {raw:?}"))
    })
}

fn text_field(el: &Element) -> Field<String> {
    if el.has_text() {
        Field::Present(el.text())
    } else {
        Field::Empty
    }
}

#[cfg(test)]
#[path = "../../tests/unit/codec/decode.rs"]
mod tests;
