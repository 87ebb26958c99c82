//! SDLXLIFF dialect parsing

use xliffqa_core::{
    parse_document, ConfirmationState, FileType, InlineTagType, ParserErrorCode, MAX_PARSE_BYTES,
};

const SDLXLIFF: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<xliff xmlns:sdl="http://sdl.com/FileTypes/SdlXliff/1.0" xmlns="urn:oasis:names:tc:xliff:document:1.2" version="1.2" sdl:version="1.0">
  <doc-info xmlns="http://sdl.com/FileTypes/SdlXliff/1.0">
    <cmt-defs>
      <cmt-def id="c1"><Comments xmlns=""><Comment severity="Medium" user="reviewer">Check terminology</Comment></Comments></cmt-def>
    </cmt-defs>
  </doc-info>
  <file original="doc.docx" source-language="en-US" target-language="th-TH" datatype="x-sdlfilterframework2">
    <header/>
    <body>
      <trans-unit id="tu1">
        <source>Hello world. Second sentence.</source>
        <seg-source><mrk mtype="seg" mid="1">Hello world.</mrk> <mrk mtype="seg" mid="2">Second <g id="5">sentence</g>.</mrk></seg-source>
        <target><mrk mtype="seg" mid="1">สวัสดีชาวโลก</mrk> <mrk mtype="seg" mid="2"><mrk mtype="x-sdl-comment" sdl:cid="c1">ประโยค</mrk>ที่สอง<g id="5"></g></mrk></target>
        <sdl:seg-defs>
          <sdl:seg id="1" conf="Translated" origin="tm" percent="100"/>
          <sdl:seg id="2" conf="Draft"/>
        </sdl:seg-defs>
      </trans-unit>
      <trans-unit id="tu2">
        <source>Done</source>
        <seg-source><mrk mtype="seg" mid="3">Done</mrk></seg-source>
        <target><mrk mtype="seg" mid="3">เสร็จ</mrk></target>
        <sdl:seg-defs><sdl:seg id="3" conf="ApprovedSignOff" percent="95"><sdl:cmt id="c1"/></sdl:seg></sdl:seg-defs>
      </trans-unit>
      <trans-unit id="structure" translate="no">
        <source><x id="0"/></source>
      </trans-unit>
      <trans-unit id="tu3">
        <source>Untouched</source>
        <seg-source><mrk mtype="seg" mid="4">Untouched</mrk></seg-source>
      </trans-unit>
    </body>
  </file>
</xliff>"#;

#[test]
fn test_trans_unit_yields_one_segment_per_mark() {
    let doc = parse_document(SDLXLIFF, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap();
    assert_eq!(doc.file_type, FileType::Sdlxliff);
    assert_eq!(doc.target_lang, "th-TH");

    let ids: Vec<&str> = doc.segments.iter().map(|s| s.segment_id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);
    let numbers: Vec<u32> = doc.segments.iter().map(|s| s.segment_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_marks_pair_with_seg_defs_by_mid() {
    let doc = parse_document(SDLXLIFF, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap();

    let first = &doc.segments[0];
    assert_eq!(first.source_text, "Hello world.");
    assert_eq!(first.target_text, "สวัสดีชาวโลก");
    assert_eq!(first.confirmation_state, Some(ConfirmationState::Translated));
    assert_eq!(first.match_percentage, Some(100));
    assert_eq!(first.word_count, 2);

    let second = &doc.segments[1];
    assert_eq!(second.source_text, "Second sentence.");
    assert_eq!(second.target_text, "ประโยคที่สอง");
    assert_eq!(second.confirmation_state, Some(ConfirmationState::Draft));
    assert_eq!(second.match_percentage, Some(0));

    let third = &doc.segments[2];
    assert_eq!(third.confirmation_state, Some(ConfirmationState::ApprovedSignOff));
    assert_eq!(third.match_percentage, Some(95));
}

#[test]
fn test_inline_tags_inside_marks() {
    let doc = parse_document(SDLXLIFF, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap();
    let tags = doc.segments[1].inline_tags.as_ref().unwrap();
    assert_eq!(tags.source.len(), 1);
    assert_eq!(tags.source[0].tag_type, InlineTagType::G);
    assert_eq!(tags.source[0].id, "5");
    assert_eq!(tags.source[0].position, "Second ".chars().count());
    assert_eq!(tags.target.len(), 1);
    assert_eq!(tags.target[0].position, "ประโยคที่สอง".chars().count());
}

#[test]
fn test_comments_resolve_through_definitions() {
    let doc = parse_document(SDLXLIFF, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap();
    assert_eq!(doc.segments[0].translator_comment, None);
    assert_eq!(
        doc.segments[1].translator_comment.as_deref(),
        Some("Check terminology")
    );
    assert_eq!(
        doc.segments[2].translator_comment.as_deref(),
        Some("Check terminology")
    );
}

#[test]
fn test_missing_target_mark_is_empty_string() {
    let doc = parse_document(SDLXLIFF, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap();
    let last = &doc.segments[3];
    assert_eq!(last.target_text, "");
    assert_eq!(last.confirmation_state, None);
    assert_eq!(last.match_percentage, None);
    assert!(last.inline_tags.as_ref().unwrap().target.is_empty());
}

#[test]
fn test_detected_dialect_wins_over_declared() {
    let doc = parse_document(SDLXLIFF, FileType::Xliff, MAX_PARSE_BYTES).unwrap();
    assert_eq!(doc.file_type, FileType::Sdlxliff);
}

#[test]
fn test_unit_without_seg_source_reads_as_plain_xliff() {
    let text = r#"<xliff xmlns:sdl="http://sdl.com/FileTypes/SdlXliff/1.0" version="1.2">
      <file source-language="en" target-language="ja"><body>
        <trans-unit id="u1"><source>Title</source><target state="final">タイトル</target></trans-unit>
      </body></file></xliff>"#;
    let doc = parse_document(text, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap();
    assert_eq!(doc.segments.len(), 1);
    assert_eq!(doc.segments[0].segment_id, "u1");
    assert_eq!(
        doc.segments[0].confirmation_state,
        Some(ConfirmationState::ApprovedSignOff)
    );
}

#[test]
fn test_tag_mismatch_aborts_parse() {
    let text = r#"<xliff xmlns:sdl="http://sdl.com/FileTypes/SdlXliff/1.0" version="1.2">
      <file source-language="en" target-language="th"><body>
        <trans-unit id="u1">
          <seg-source><mrk mtype="seg" mid="1">Bold <bpt id="9">&lt;b&gt;</bpt>text</mrk></seg-source>
        </trans-unit>
      </body></file></xliff>"#;
    let err = parse_document(text, FileType::Sdlxliff, MAX_PARSE_BYTES).unwrap_err();
    assert_eq!(err.code, ParserErrorCode::TagMismatch);
    assert_eq!(err.details, "9");
}

#[test]
fn test_numbering_continues_across_files() {
    let text = r#"<xliff version="1.2">
      <file source-language="en" target-language="th"><body>
        <trans-unit id="a"><source>One</source></trans-unit>
      </body></file>
      <file source-language="en" target-language="th"><body>
        <trans-unit id="b"><source>Two</source></trans-unit>
      </body></file></xliff>"#;
    let doc = parse_document(text, FileType::Xliff, MAX_PARSE_BYTES).unwrap();
    let numbers: Vec<u32> = doc.segments.iter().map(|s| s.segment_number).collect();
    assert_eq!(numbers, vec![1, 2]);
}
