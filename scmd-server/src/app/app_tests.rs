use super::{ConsoleApp, LineOutcome};
use crate::ingress::serve_lines;
use googletest::prelude::*;
use rstest::rstest;
use scmd_common::access::AccessLevel;
use scmd_common::config::{RuntimeConfig, VotePromotionPolicy};
use scmd_core::command::ConsoleReply;
use scmd_gate::echo::ConnectedClient;
use scmd_gate::gate::Caller;

fn app_with_peers() -> ConsoleApp {
    let mut app = ConsoleApp::new(RuntimeConfig::default());
    app.peers = vec![
        ConnectedClient {
            id: 2,
            level: AccessLevel::Info,
        },
        ConnectedClient {
            id: 3,
            level: AccessLevel::Admin,
        },
    ];
    app
}

fn basic_connection() -> Caller {
    Caller::Connection {
        id: 7,
        level: AccessLevel::Basic,
    }
}

fn reply_text(app: &ConsoleApp, caller: Caller, line: &str) -> String {
    app.handle_line(caller, line)
        .expect("line carries a command")
        .reply
        .to_console_text()
}

fn run_script(app: &ConsoleApp, caller: Caller, script: &str) -> (usize, String) {
    let mut output = Vec::new();
    let handled =
        serve_lines(app, caller, script.as_bytes(), &mut output).expect("in-memory I/O succeeds");
    (
        handled,
        String::from_utf8(output).expect("replies are UTF-8"),
    )
}

#[rstest]
#[case("/set timeout 60", "OK set echo=2,3")]
#[case("wall hello", "OK wall echo=3")]
#[case("start", "OK start echo=none")]
#[case("frobnicate", "ERR unknown command 'frobnicate'")]
fn console_lines_render_decisions(#[case] line: &str, #[case] expected: &str) {
    assert_that!(reply_text(&app_with_peers(), Caller::Console, line), eq(expected));
}

#[rstest]
#[case("set timeout 60", "VOTE set percent=50 flags=0")]
#[case("kick alice", "VOTE kick percent=50 flags=1")]
#[case("quit", "ERR you need 'hack' access to use 'quit'")]
#[case("vote yes 1", "OK vote echo=none")]
fn basic_connection_lines_render_decisions(#[case] line: &str, #[case] expected: &str) {
    assert_that!(reply_text(&app_with_peers(), basic_connection(), line), eq(expected));
}

#[rstest]
fn echo_audience_excludes_the_caller() {
    let app = app_with_peers();
    let admin = Caller::Connection {
        id: 3,
        level: AccessLevel::Admin,
    };
    assert_that!(reply_text(&app, admin, "cmdlevel"), eq("OK cmdlevel echo=none"));
    assert_that!(reply_text(&app, admin, "set"), eq("OK set echo=2"));
}

#[rstest]
fn disabled_promotion_turns_votes_into_denials() {
    let app = ConsoleApp::new(RuntimeConfig {
        vote_promotion: VotePromotionPolicy::disabled(),
        ..RuntimeConfig::default()
    });
    assert_that!(
        reply_text(&app, basic_connection(), "kick alice"),
        eq("ERR you need 'ctrl' access to use 'kick'")
    );
}

#[rstest]
fn help_is_rendered_at_caller_level() {
    let app = app_with_peers();
    let outcome = app
        .handle_line(basic_connection(), "help commands")
        .expect("line carries a command");
    let ConsoleReply::Info(text) = &outcome.reply else {
        panic!("help must reply with info text");
    };
    assert_that!(text.contains("start"), eq(true));
    assert_that!(text.contains("rfcstyle"), eq(false));
    assert_that!(outcome.shutdown, eq(false));

    assert_that!(
        reply_text(&app, Caller::Console, "help qu").starts_with("Command: quit  -  "),
        eq(true)
    );
    assert_that!(
        reply_text(&app, Caller::Console, "help s"),
        eq("ERR ambiguous command 's', could be: start, show, set, surrender, save, serverid")
    );
}

#[rstest]
fn help_is_denied_below_info() {
    let app = app_with_peers();
    let outsider = Caller::Connection {
        id: 9,
        level: AccessLevel::None,
    };
    assert_that!(
        reply_text(&app, outsider, "help"),
        eq("ERR you need 'info' access to use 'help'")
    );
}

#[rstest]
fn blank_lines_produce_no_outcome() {
    let app = app_with_peers();
    assert_that!(&app.handle_line(Caller::Console, "   "), eq(&None));
    assert_that!(&app.handle_line(Caller::Console, "/"), eq(&None));
}

#[rstest]
fn accepted_quit_requests_shutdown() {
    let app = app_with_peers();
    assert_that!(
        &app.handle_line(Caller::Console, "quit"),
        eq(&Some(LineOutcome {
            reply: ConsoleReply::Accepted("quit echo=2,3".to_owned()),
            shutdown: true,
        }))
    );
}

#[rstest]
fn script_skips_comments_and_stops_at_quit() {
    let app = app_with_peers();
    let script = "# warm up\n\nstart\n/kick bob\nquit\nset timeout 1\n";
    let (handled, output) = run_script(&app, Caller::Console, script);

    assert_that!(handled, eq(3_usize));
    assert_that!(
        output,
        eq("OK start echo=none\nOK kick echo=3\nOK quit echo=2,3\n")
    );
}

#[rstest]
fn script_reports_non_utf8_lines_and_continues() {
    let app = app_with_peers();
    let mut input = b"start\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"serverid");

    let mut output = Vec::new();
    let handled =
        serve_lines(&app, Caller::Console, input.as_slice(), &mut output).expect("in-memory I/O");
    let output = String::from_utf8(output).expect("replies are UTF-8");
    let lines = output.lines().collect::<Vec<_>>();

    assert_that!(handled, eq(2_usize));
    assert_that!(lines.len(), eq(3_usize));
    assert_that!(lines[0], eq("OK start echo=none"));
    assert_that!(
        lines[1].starts_with("ERR protocol error: input line is not UTF-8"),
        eq(true)
    );
    assert_that!(lines[2], eq("OK serverid echo=none"));
}

#[rstest]
fn startup_summary_reports_gate_configuration() {
    let summary = app_with_peers().startup_summary();
    assert_that!(summary.contains("default_vote_percent=50%"), eq(true));
    assert_that!(summary.contains("vote_min_proposer=basic"), eq(true));
    assert_that!(summary.contains("peers=2"), eq(true));
}
