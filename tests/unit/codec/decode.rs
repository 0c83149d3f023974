use super::*;

fn decode_str(xml: &str, opts: &DecodeOptions) -> XmemlResult<Document> {
    let root = crate::xml::parse(xml.as_bytes(), opts.max_element_depth)?;
    Decoder::new(opts).document(&root)
}

fn decode_default(xml: &str) -> XmemlResult<Document> {
    decode_str(xml, &DecodeOptions::default())
}

#[test]
fn forward_file_reference_resolves_to_the_later_definition() {
    let doc = decode_default(
        r#"<xmeml version="4"><sequence>
             <media><video><track>
               <clipitem id="a"><file id="f1"/></clipitem>
               <clipitem id="b"><file id="f1"><name>late.mov</name><rate><timebase>24</timebase></rate></file></clipitem>
             </track></video></media>
           </sequence></xmeml>"#,
    )
    .unwrap();
    assert_eq!(doc.files.len(), 1);
    let items: Vec<&ClipItem> = doc.sequence().unwrap().clip_items().collect();
    assert_eq!(items[0].file, items[1].file);
    let file = doc.resolve_file(*items[0].file.value().unwrap()).unwrap();
    assert_eq!(file.name.get(), "late.mov");
    assert_eq!(file.rate.timebase, 24);
}

#[test]
fn dangling_file_reference_fails() {
    let err = decode_default(r#"<xmeml version="4"><clip><file id="nope"/></clip></xmeml>"#)
        .unwrap_err();
    assert!(matches!(err, XmemlError::MalformedField { .. }));
    assert_eq!(err.path().unwrap().to_string(), "xmeml.clip.file");
    assert!(err.to_string().contains("nope"));
}

#[test]
fn equal_repeated_definitions_merge() {
    let def = "<file id=\"f\"><name>x</name><rate><timebase>30</timebase></rate></file>";
    let xml = format!(
        "<xmeml version=\"5\"><sequence><media><video><track>\
         <clipitem>{def}</clipitem><clipitem>{def}</clipitem>\
         </track></video></media></sequence></xmeml>"
    );
    let doc = decode_default(&xml).unwrap();
    assert_eq!(doc.files.len(), 1);
}

#[test]
fn conflicting_definitions_fail() {
    let xml = "<xmeml version=\"5\"><sequence><media><video><track>\
         <clipitem><file id=\"f\"><name>x</name><rate><timebase>30</timebase></rate></file></clipitem>\
         <clipitem><file id=\"f\"><name>y</name><rate><timebase>30</timebase></rate></file></clipitem>\
         </track></video></media></sequence></xmeml>";
    let err = decode_default(xml).unwrap_err();
    assert_eq!(
        err.path().unwrap().to_string(),
        "xmeml.sequence.media.video.track[0].clipitem[1].file@id"
    );
}

#[test]
fn file_definition_requires_rate() {
    let err = decode_default(
        r#"<xmeml version="5"><clip><file id="f"><name>x</name></file></clip></xmeml>"#,
    )
    .unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "xmeml.clip.file.rate");
}

#[test]
fn rate_requires_a_numeric_timebase() {
    let err = decode_default(
        r#"<xmeml version="5"><clip><rate><ntsc>TRUE</ntsc></rate></clip></xmeml>"#,
    )
    .unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "xmeml.clip.rate.timebase");

    let err = decode_default(
        r#"<xmeml version="5"><clip><rate><timebase>fast</timebase></rate></clip></xmeml>"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("fast"));
}

#[test]
fn sequence_cycle_is_rejected() {
    let err = decode_default(
        r#"<xmeml version="5"><sequence id="s1"><sequence id="s2"><sequence id="s1"/></sequence></sequence></xmeml>"#,
    )
    .unwrap_err();
    assert_eq!(
        err.path().unwrap().to_string(),
        "xmeml.sequence.sequence[0].sequence[0]"
    );
}

#[test]
fn sibling_sequences_may_share_an_id() {
    let doc = decode_default(
        r#"<xmeml version="5"><sequence id="s1"><sequence id="s2"/><sequence id="s2"/></sequence></xmeml>"#,
    )
    .unwrap();
    assert_eq!(doc.sequence().unwrap().sequences.len(), 2);
}

#[test]
fn legacy_flat_comment_becomes_first_master_comment() {
    let doc = decode_default(
        r#"<xmeml version="1"><sequence><comment>old note</comment></sequence></xmeml>"#,
    )
    .unwrap();
    let comments = doc.sequence().unwrap().comments.value().unwrap();
    assert_eq!(comments.master_comment_1.get(), "old note");
    assert!(comments.master_comment_2.is_absent());
}

#[test]
fn legacy_tags_decode_into_canonical_fields() {
    let doc = decode_default(
        r#"<xmeml version="2"><sequence>
             <pixelAspectRatio>square</pixelAspectRatio>
             <descriptionlogginginfo><scene>12</scene></descriptionlogginginfo>
             <media><video><track><clipitem><sublipinfo><startoffset>4</startoffset></sublipinfo></clipitem></track></video></media>
           </sequence></xmeml>"#,
    )
    .unwrap();
    let seq = doc.sequence().unwrap();
    assert_eq!(seq.pixel_aspect_ratio.get(), "square");
    assert_eq!(seq.logging_info.value().unwrap().scene.get(), "12");
    let item = seq.clip_items().next().unwrap();
    assert_eq!(item.subclip_info.value().unwrap().start_offset, Field::Present(4));
    assert!(seq.extra.is_empty());
}

#[test]
fn malformed_optional_number_defaults_unless_strict() {
    let xml = r#"<xmeml version="5"><clip><duration>long</duration></clip></xmeml>"#;
    let doc = decode_default(xml).unwrap();
    assert_eq!(doc.clip().unwrap().duration, Field::Present(0));

    let strict = DecodeOptions {
        strict: true,
        ..DecodeOptions::default()
    };
    let err = decode_str(xml, &strict).unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "xmeml.clip.duration");
}

#[test]
fn unknown_tokens_are_kept_unless_strict() {
    let xml = r#"<xmeml version="5"><clip><compositemode>overlay</compositemode><alphatype>straight</alphatype></clip></xmeml>"#;
    let doc = decode_default(xml).unwrap();
    let clip = doc.clip().unwrap();
    assert_eq!(
        clip.composite_mode,
        Field::Present(CompositeMode::Other("overlay".to_string()))
    );
    assert_eq!(clip.alpha_type, Field::Present(AlphaType::Straight));

    let strict = DecodeOptions {
        strict: true,
        ..DecodeOptions::default()
    };
    assert!(decode_str(xml, &strict).is_err());
}

#[test]
fn malformed_uuid_reads_as_nil() {
    let doc = decode_default(
        r#"<xmeml version="5"><sequence><uuid>not-a-uuid</uuid></sequence></xmeml>"#,
    )
    .unwrap();
    assert_eq!(doc.sequence().unwrap().uuid, Field::Present(uuid::Uuid::nil()));
}

#[test]
fn unknown_content_is_preserved_or_dropped() {
    let xml = r#"<xmeml version="5" vendor="x"><clip id="c"><name>a</name><vendorthing>1</vendorthing></clip></xmeml>"#;
    let doc = decode_default(xml).unwrap();
    assert_eq!(doc.extra.attributes, vec![("vendor".to_string(), "x".to_string())]);
    let clip = doc.clip().unwrap();
    assert_eq!(clip.id.as_deref(), Some("c"));
    assert_eq!(clip.extra.elements.len(), 1);
    assert_eq!(clip.extra.elements[0].name, "vendorthing");

    let opts = DecodeOptions {
        preserve_unknown: false,
        ..DecodeOptions::default()
    };
    let doc = decode_str(xml, &opts).unwrap();
    assert!(doc.extra.is_empty());
    assert!(doc.clip().unwrap().extra.is_empty());
}

#[test]
fn root_must_be_xmeml() {
    let err = decode_default(r#"<fcpxml version="1.9"/>"#).unwrap_err();
    assert!(matches!(err, XmemlError::MalformedXml { .. }));
}

#[test]
fn clip_and_sequence_together_are_rejected() {
    let err = decode_default(r#"<xmeml version="5"><clip/><sequence/></xmeml>"#).unwrap_err();
    assert_eq!(err.path().unwrap().to_string(), "xmeml");
}

#[test]
fn value_keeps_text_and_sub_fields() {
    let doc = decode_default(
        r#"<xmeml version="5"><clip><filter><effect><parameter>
             <parameterid>color</parameterid>
             <value><red>3</red><green>7</green><blue>5</blue><alpha>9</alpha></value>
             <keyframe><when>10</when><value>42</value><inbez><horiz>1</horiz><vert>2</vert></inbez></keyframe>
           </parameter></effect></filter></clip></xmeml>"#,
    )
    .unwrap();
    let clip = doc.clip().unwrap();
    let effect = clip.filters[0].effect.value().unwrap();
    let param = effect.parameter("color").unwrap();
    let color = param.value.value().unwrap().as_color();
    assert_eq!((color.red, color.blue, color.green, color.alpha), (3, 5, 7, 9));
    let key = &param.keyframes[0];
    assert_eq!(key.value.value().unwrap().as_number(), 42);
    assert_eq!(key.in_bez.value().unwrap().as_position().vert, 2);
}

#[test]
fn markup_on_text_fields_and_stray_text_are_preserved() {
    let xml = r#"<xmeml version="5"><clip>stray<name>foo<vendor:x/></name><duration unit="f">5</duration></clip></xmeml>"#;
    let doc = decode_default(xml).unwrap();
    let clip = doc.clip().unwrap();
    assert_eq!(clip.name.get(), "foo");
    assert_eq!(clip.duration.get(), 5);
    assert_eq!(clip.extra.text, "stray");
    let tags: Vec<&str> = clip.extra.leaves.iter().map(|l| l.tag.as_str()).collect();
    assert_eq!(tags, vec!["name", "duration"]);
    assert_eq!(clip.extra.leaves[0].elements[0].name, "vendor:x");
    assert_eq!(
        clip.extra.leaves[1].attributes,
        vec![("unit".to_string(), "f".to_string())]
    );

    let out = String::from_utf8(crate::encode(&doc)).unwrap();
    assert!(out.contains("stray"));
    assert!(out.contains("<name>foo<vendor:x/></name>"));
    assert!(out.contains(r#"<duration unit="f">5</duration>"#));
    assert_eq!(crate::decode(out.as_bytes()).unwrap(), doc);
}

#[test]
fn markup_on_text_fields_is_dropped_when_not_preserving() {
    let xml = r#"<xmeml version="5"><clip>stray<duration unit="f">5</duration></clip></xmeml>"#;
    let opts = DecodeOptions {
        preserve_unknown: false,
        ..DecodeOptions::default()
    };
    let doc = decode_str(xml, &opts).unwrap();
    let clip = doc.clip().unwrap();
    assert_eq!(clip.duration.get(), 5);
    assert!(clip.extra.is_empty());
}

#[test]
fn value_text_is_not_duplicated_as_stray_text() {
    let doc = decode_default(
        r#"<xmeml version="5"><clip><filter><effect><parameter><value>42</value></parameter></effect></filter></clip></xmeml>"#,
    )
    .unwrap();
    let effect = doc.clip().unwrap().filters[0].effect.value().unwrap();
    let value = effect.parameters[0].value.value().unwrap();
    assert_eq!(value.data, "42");
    assert!(value.extra.is_empty());
}

#[test]
fn attributes_on_file_references_are_dropped() {
    let doc = decode_default(
        r#"<xmeml version="5"><sequence><media><video><track>
             <clipitem><file id="f"><rate><timebase>25</timebase></rate></file></clipitem>
             <clipitem><file id="f" vendor="x"/></clipitem>
           </track></video></media></sequence></xmeml>"#,
    )
    .unwrap();
    assert_eq!(doc.files.len(), 1);
    let items: Vec<&ClipItem> = doc.sequence().unwrap().clip_items().collect();
    assert_eq!(items[0].file, items[1].file);
    assert!(doc.file("f").unwrap().extra.is_empty());
    let out = String::from_utf8(crate::encode(&doc)).unwrap();
    assert!(!out.contains("vendor"));
}

#[test]
fn nested_sequences_are_decoded_before_their_parents() {
    let doc = decode_default(
        r#"<xmeml version="5"><sequence id="outer"><name>o</name>
             <media><video><track><clipitem><sequence id="inner"><name>i</name></sequence></clipitem></track></video></media>
             <sequence id="direct"><name>d</name></sequence>
           </sequence></xmeml>"#,
    )
    .unwrap();
    let outer = doc.sequence().unwrap();
    assert_eq!(outer.name.get(), "o");
    let inner = outer.clip_items().next().unwrap().sequence.value().unwrap();
    assert_eq!(inner.id.as_deref(), Some("inner"));
    assert_eq!(inner.name.get(), "i");
    assert_eq!(outer.sequences[0].name.get(), "d");
}
