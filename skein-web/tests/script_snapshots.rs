//! Snapshot tests for the generated gallery scripts.
//!
//! These pin the exact text of each artifact. Run `cargo insta review` to
//! update snapshots when making intentional changes.

use skein_codegen::Program;
use skein_web::{CommentSubmission, EditorSubmission, TokenValidation, gallery_api};

fn render(source: impl skein_codegen::ScriptSource) -> String {
    let mut program = Program::new(gallery_api(""), source);
    let text = program.text().expect("build failed");
    assert!(text.ends_with('\n'), "artifact must be newline-terminated");
    text
}

#[test]
fn comment_submission() {
    let text = render(CommentSubmission);
    insta::assert_snapshot!(text.trim_end(), @r"
    function postComment(id, author, text, callback) {
      let req=new XMLHttpRequest();
      req.onreadystatechange = () => {
        if (req.readyState != 4) return;
        callback(req.responseText)
      };
      req.open('POST', `/item/${id}/comment`);
      req.setRequestHeader('X-Skein-Csrf',document.cookie.split('; ').find(c => c.startsWith('skein=')).substring(6));
      req.send(JSON.stringify({author: author, text: text}));
    }
    ");
}

#[test]
fn token_validation() {
    let text = render(TokenValidation);
    insta::assert_snapshot!(text.trim_end(), @r"
    function validateToken(name, id, callback) {
      let req=new XMLHttpRequest();
      req.onreadystatechange = () => {
        if (req.readyState != 4) return;
        callback();
      };
      req.open('POST', `/token/${name}/${id}/validate`);
      req.send();
    }
    function deleteToken(name, id, callback) {
      let req=new XMLHttpRequest();
      req.onreadystatechange = () => {
        if (req.readyState != 4) return;
        callback();
      };
      req.open('DELETE', `/token/${name}/${id}`);
      req.send();
    }
    ");
}

#[test]
fn editor_submission() {
    let text = render(EditorSubmission);
    insta::assert_snapshot!(text.trim_end(), @r"
    function saveDescription(id, description, callback) {
      let req=new XMLHttpRequest();
      req.onreadystatechange = () => {
        if (req.readyState != 4) return;
        callback();
      };
      req.open('POST', `/item/${id}/description`);
      req.send(description);
    }
    function submitMassTagging(ids, tagSpec, callback) {
      let req=new XMLHttpRequest();
      req.onreadystatechange = () => {
        if (req.readyState != 4) return;
        callback();
      };
      req.open('PUT', `/tags`);
      req.send(JSON.stringify({ids: ids, tags: tagSpec}));
    }
    ");
}

#[test]
fn base_url_prefixes_every_call() {
    let mut program = Program::new(gallery_api("https://gallery.example"), CommentSubmission);
    let text = program.text().expect("build failed");
    assert!(text.contains("req.open('POST', `https://gallery.example/item/${id}/comment`);"));
}
