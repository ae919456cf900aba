use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use breakout::session::TerminalSession;

const ENTER_ALT_SCREEN: &str = "\x1B[?1049h";
const LEAVE_ALT_SCREEN: &str = "\x1B[?1049l";
const HIDE_CURSOR: &str = "\x1B[?25l";
const SHOW_CURSOR: &str = "\x1B[?25h";

/// Records everything written, refusing any write that contains `reject`.
struct FakeTerminal {
    written: Rc<RefCell<Vec<u8>>>,
    reject: Option<&'static str>,
}

impl Write for FakeTerminal {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Some(reject) = self.reject {
            if buf.windows(reject.len()).any(|w| w == reject.as_bytes()) {
                return Err(io::Error::new(io::ErrorKind::Other, "unsupported"));
            }
        }
        self.written.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn fake(reject: Option<&'static str>) -> (FakeTerminal, Rc<RefCell<Vec<u8>>>) {
    let written = Rc::new(RefCell::new(Vec::new()));
    (FakeTerminal { written: Rc::clone(&written), reject }, written)
}

fn text(written: &Rc<RefCell<Vec<u8>>>) -> String {
    String::from_utf8_lossy(&written.borrow()).into_owned()
}

#[test]
fn session_sets_up_and_restores() {
    let (term, written) = fake(None);
    let session = TerminalSession::enter(term).unwrap();
    let setup = text(&written);
    assert!(setup.contains(ENTER_ALT_SCREEN));
    assert!(setup.contains(HIDE_CURSOR));
    assert!(!setup.contains(LEAVE_ALT_SCREEN));

    drop(session);
    let all = text(&written);
    assert!(all.contains(SHOW_CURSOR));
    assert!(all.contains(LEAVE_ALT_SCREEN));
}

#[test]
fn failed_alternate_screen_still_restores() {
    let (term, written) = fake(Some(ENTER_ALT_SCREEN));
    assert!(TerminalSession::enter(term).is_err());
    let all = text(&written);
    assert!(all.contains(SHOW_CURSOR));
    assert!(all.contains(LEAVE_ALT_SCREEN));
}

#[test]
fn failed_cursor_hide_still_restores() {
    let (term, written) = fake(Some(HIDE_CURSOR));
    assert!(TerminalSession::enter(term).is_err());
    let all = text(&written);
    assert!(all.contains(ENTER_ALT_SCREEN));
    assert!(all.contains(SHOW_CURSOR));
    assert!(all.contains(LEAVE_ALT_SCREEN));
}

#[test]
fn out_gives_access_to_the_writer() {
    let (term, written) = fake(None);
    let mut session = TerminalSession::enter(term).unwrap();
    session.out().write_all(b"frame").unwrap();
    assert!(text(&written).contains("frame"));
}
