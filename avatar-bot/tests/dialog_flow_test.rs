//! Integration tests for the avatar dialog driven through [`DialogManager::handle_event`].
//!
//! **BDD style**: Given a chat at some dialog step, when the user presses a button or sends text,
//! then the session moves to the expected step and the expected transport calls are made.

mod common;

use std::sync::{Arc, Mutex};

use avatar_bot::dialog::messages::{
    MSG_AVATAR_USAGE, MSG_CANCELLED, MSG_GREETING, MSG_INVALID_COLORS, MSG_NO_SVG,
    MSG_PREVIEW_SEND_FAILED, MSG_RENDER_FAILED, MSG_STYLE_RENDER_FAILED, MSG_SVG_SEND_FAILED,
    TOAST_OUTDATED, TOAST_REGENERATING, TOAST_UNEXPECTED,
};
use avatar_bot::dialog::{DialogState, Palette, DEFAULT_COLORS};
use avatar_bot::{DialogManager, Step};
use avatar_render::{AvatarVariant, RenderError};
use common::{
    manager, manager_with, press, press_orphan, text, BotCall, EchoRenderer, FakeRaster,
    MockBot, MockRaster, MockRenderer, Op,
};

const CHAT: i64 = 42;

fn step(m: &DialogManager) -> Option<Step> {
    m.sessions().get(CHAT).map(|s| s.step())
}

fn palette(m: &DialogManager) -> Option<Palette> {
    m.sessions().get(CHAT).and_then(|s| s.palette().cloned())
}

fn preview_id(m: &DialogManager) -> String {
    m.sessions()
        .get(CHAT)
        .and_then(|s| s.preview_message_id().map(str::to_owned))
        .expect("session in preview")
}

/// `/avatar <name>` → style → color method; returns the id of the style message.
async fn start(m: &DialogManager, bot: &MockBot, name: &str, variant: &str) -> String {
    m.handle_event(&text(CHAT, &format!("/avatar {}", name)))
        .await
        .unwrap();
    let menu = bot.last_sent_id().unwrap();
    m.handle_event(&press(CHAT, &menu, &format!("select_type_{}", variant)))
        .await
        .unwrap();
    menu
}

/// Runs the dialog up to a preview made from `method` colors; returns the preview message id.
async fn to_preview(m: &DialogManager, bot: &MockBot, name: &str, variant: &str, method: &str) -> String {
    let menu = start(m, bot, name, variant).await;
    m.handle_event(&press(CHAT, &menu, &format!("select_color_{}", method)))
        .await
        .unwrap();
    preview_id(m)
}

/// **Test: /avatar, any style, default colors renders once with the default palette in order.**
#[tokio::test]
async fn test_default_palette_renders_once_in_order() {
    for variant in AvatarVariant::ALL {
        let bot = Arc::new(MockBot::new());
        let seen = Arc::new(Mutex::new(Vec::<(AvatarVariant, Vec<String>)>::new()));
        let seen_in_mock = seen.clone();

        let mut renderer = MockRenderer::new();
        renderer
            .expect_render()
            .times(1)
            .returning(move |_, variant, colors, size, square| {
                assert_eq!(size, 800);
                assert!(square);
                seen_in_mock.lock().unwrap().push((variant, colors.to_vec()));
                Ok("<svg/>".to_string())
            });
        let mut raster = MockRaster::new();
        raster
            .expect_rasterize()
            .times(1)
            .returning(|_| Ok(vec![1, 2, 3]));

        let m = manager_with(bot.clone(), Arc::new(renderer), Arc::new(raster));
        let preview = to_preview(&m, &bot, "Alice", variant.as_str(), "default").await;

        assert_eq!(
            seen.lock().unwrap().as_slice(),
            [(variant, DEFAULT_COLORS.map(String::from).to_vec())]
        );
        assert_eq!(step(&m), Some(Step::Preview));
        assert_eq!(bot.photos().len(), 1);
        match &bot.photos()[0] {
            BotCall::Photo {
                id,
                caption,
                keyboard,
                ..
            } => {
                assert_eq!(id, &preview);
                assert!(caption.contains("\"Alice\""));
                assert!(caption.contains(variant.as_str()));
                assert_eq!(keyboard.callback_data()[0], "regenerate_colors");
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}

/// **Test: A very long name still gets a preview; the caption is shortened, the render uses the full name.**
#[tokio::test]
async fn test_long_name_preview_caption_is_shortened() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let name = "N".repeat(3000);
    to_preview(&m, &bot, &name, "pixel", "default").await;

    assert_eq!(step(&m), Some(Step::Preview));
    match &bot.photos()[0] {
        BotCall::Photo { caption, .. } => {
            assert!(caption.encode_utf16().count() <= 1024);
            assert!(caption.contains('…'));
        }
        other => panic!("unexpected {:?}", other),
    }
    let session = m.sessions().get(CHAT).unwrap();
    assert!(session
        .render()
        .unwrap()
        .svg
        .contains(&format!("data-name=\"{}\"", name)));
}

/// **Test: Choosing a style edits the style message into the color method menu.**
#[tokio::test]
async fn test_select_type_shows_color_methods() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let menu = start(&m, &bot, "Alice", "pixel").await;

    assert_eq!(step(&m), Some(Step::ColorMethodSelection));
    let edit = bot
        .calls()
        .into_iter()
        .find(|c| matches!(c, BotCall::Edit { .. }))
        .unwrap();
    match edit {
        BotCall::Edit {
            message_id,
            text,
            keyboard,
            ..
        } => {
            assert_eq!(message_id, menu);
            assert!(text.contains("pixel"));
            assert_eq!(keyboard.unwrap().callback_data()[0], "select_color_random");
        }
        _ => unreachable!(),
    }
}

/// **Test: Custom colors are normalized; a bad list is rejected whole and the step is kept.**
#[tokio::test]
async fn test_custom_colors_accept_and_reject() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let menu = start(&m, &bot, "Alice", "beam").await;
    m.handle_event(&press(CHAT, &menu, "select_color_custom"))
        .await
        .unwrap();
    assert_eq!(step(&m), Some(Step::AwaitingCustomColors));

    m.handle_event(&text(CHAT, "red, 12345")).await.unwrap();
    assert_eq!(step(&m), Some(Step::AwaitingCustomColors));
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_INVALID_COLORS);
    assert!(bot.photos().is_empty());

    m.handle_event(&text(CHAT, "#ff0000, 00ff00, abc"))
        .await
        .unwrap();
    assert_eq!(step(&m), Some(Step::Preview));
    assert_eq!(
        palette(&m).unwrap().colors(),
        ["#ff0000", "#00ff00", "#abc"]
    );
    let svg = m.sessions().get(CHAT).unwrap().render().unwrap().svg.clone();
    assert!(svg.contains("data-colors=\"#ff0000,#00ff00,#abc\""));
}

/// **Test: Random colors use the configured palette length.**
#[tokio::test]
async fn test_random_palette_size_is_configurable() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone()).with_palette_size(3);
    to_preview(&m, &bot, "Alice", "ring", "random").await;
    assert_eq!(palette(&m).unwrap().len(), 3);
}

/// **Test: Regenerating twice gives two different palettes, edits the preview in place and keeps only the latest draw.**
#[tokio::test]
async fn test_regenerate_twice_draws_new_palettes() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "Alice", "sunset", "default").await;

    m.handle_event(&press(CHAT, &preview, "regenerate_colors"))
        .await
        .unwrap();
    let first = palette(&m).unwrap();
    m.handle_event(&press(CHAT, &preview, "regenerate_colors"))
        .await
        .unwrap();
    let second = palette(&m).unwrap();

    assert_eq!(first.len(), 5);
    assert_eq!(second.len(), 5);
    assert_ne!(first, second);
    assert_ne!(first, Palette::default_palette());
    assert_eq!(preview_id(&m), preview);

    let session = m.sessions().get(CHAT).unwrap();
    let svg = &session.render().unwrap().svg;
    assert!(svg.contains(&second.colors().join(",")));

    let edits = bot
        .calls()
        .into_iter()
        .filter(|c| matches!(c, BotCall::EditPhoto { message_id, .. } if *message_id == preview))
        .count();
    assert_eq!(edits, 2);
    assert_eq!(bot.photos().len(), 1);
    assert!(bot
        .answers()
        .contains(&Some(TOAST_REGENERATING.to_string())));
}

/// **Test: When the preview cannot be edited, it is deleted and resent; the session follows the new message.**
#[tokio::test]
async fn test_regenerate_falls_back_to_resend() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "Alice", "bauhaus", "default").await;

    bot.fail(Op::EditPhoto);
    m.handle_event(&press(CHAT, &preview, "regenerate_colors"))
        .await
        .unwrap();

    let new_preview = preview_id(&m);
    assert_ne!(new_preview, preview);
    assert!(bot.calls().contains(&BotCall::Delete {
        chat_id: CHAT,
        message_id: preview.clone(),
    }));
    assert_eq!(bot.photos().len(), 2);
    assert_ne!(palette(&m).unwrap(), Palette::default_palette());
}

/// **Test: A failed regenerate render keeps the previous preview untouched.**
#[tokio::test]
async fn test_regenerate_render_failure_keeps_preview() {
    let bot = Arc::new(MockBot::new());
    let mut renderer = MockRenderer::new();
    let mut calls = 0;
    renderer.expect_render().returning(move |_, _, _, _, _| {
        calls += 1;
        if calls == 1 {
            Ok("<svg/>".to_string())
        } else {
            Err(RenderError::Raster("boom".to_string()))
        }
    });
    let m = manager_with(bot.clone(), Arc::new(renderer), Arc::new(FakeRaster));
    let preview = to_preview(&m, &bot, "Alice", "beam", "default").await;
    let before = m.sessions().get(CHAT).unwrap();

    m.handle_event(&press(CHAT, &preview, "regenerate_colors"))
        .await
        .unwrap();

    assert_eq!(m.sessions().get(CHAT).unwrap(), before);
    assert!(!bot
        .calls()
        .iter()
        .any(|c| matches!(c, BotCall::EditPhoto { .. })));
}

/// **Test: Change style, then pick a new one: the palette is preserved exactly.**
#[tokio::test]
async fn test_change_style_preserves_colors() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "Alice", "marble", "random").await;
    let colors = palette(&m).unwrap();

    m.handle_event(&press(CHAT, &preview, "change_style"))
        .await
        .unwrap();
    assert_eq!(step(&m), Some(Step::SelectingNewStyle));
    assert!(bot.calls().contains(&BotCall::Delete {
        chat_id: CHAT,
        message_id: preview.clone(),
    }));
    let style_menu = bot.last_sent_id().unwrap();
    assert!(bot.sent_texts().last().unwrap().contains(&colors.to_string()));

    m.handle_event(&press(CHAT, &style_menu, "select_type_ring"))
        .await
        .unwrap();

    assert_eq!(step(&m), Some(Step::Preview));
    let session = m.sessions().get(CHAT).unwrap();
    let render = session.render().unwrap();
    assert_eq!(render.variant, AvatarVariant::Ring);
    assert_eq!(render.palette, colors);
    assert!(render.svg.contains("data-variant=\"ring\""));
    assert_ne!(preview_id(&m), preview);
}

/// **Test: A failed render while restyling keeps the session in style selection with its colors.**
#[tokio::test]
async fn test_restyle_render_failure_keeps_style_selection() {
    let bot = Arc::new(MockBot::new());
    let mut renderer = MockRenderer::new();
    renderer
        .expect_render()
        .returning(|_, variant, _, _, _| match variant {
            AvatarVariant::Pixel => Err(RenderError::Parse("bad".to_string())),
            _ => Ok("<svg/>".to_string()),
        });
    let m = manager_with(bot.clone(), Arc::new(renderer), Arc::new(FakeRaster));
    let preview = to_preview(&m, &bot, "Alice", "beam", "default").await;
    m.handle_event(&press(CHAT, &preview, "change_style"))
        .await
        .unwrap();
    let menu = bot.last_sent_id().unwrap();

    m.handle_event(&press(CHAT, &menu, "select_type_pixel"))
        .await
        .unwrap();

    assert_eq!(step(&m), Some(Step::SelectingNewStyle));
    assert_eq!(palette(&m).unwrap(), Palette::default_palette());
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_STYLE_RENDER_FAILED);
}

/// Drives a fresh dialog into `target`; returns the id of the message whose buttons are live.
async fn reach(m: &DialogManager, bot: &MockBot, target: Step) -> String {
    let live = match target {
        Step::TypeSelection => {
            m.handle_event(&text(CHAT, "/avatar Alice")).await.unwrap();
            bot.last_sent_id().unwrap()
        }
        Step::ColorMethodSelection => start(m, bot, "Alice", "beam").await,
        Step::AwaitingCustomColors => {
            let menu = start(m, bot, "Alice", "beam").await;
            m.handle_event(&press(CHAT, &menu, "select_color_custom"))
                .await
                .unwrap();
            menu
        }
        Step::Preview => to_preview(m, bot, "Alice", "ring", "random").await,
        Step::SelectingNewStyle => {
            let preview = to_preview(m, bot, "Alice", "ring", "random").await;
            m.handle_event(&press(CHAT, &preview, "change_style"))
                .await
                .unwrap();
            bot.last_sent_id().unwrap()
        }
    };
    assert_eq!(step(m), Some(target));
    live
}

/// **Test: Cancel from every step clears the session; the next /avatar starts fresh.**
///
/// **Setup:** a dialog driven into each of the five steps in turn.
/// **Action:** press cancel on the live message, then send `/avatar Bob`.
/// **Expected:** no session after cancel, a cancellation notice, and a new session with no
/// style, palette or render carried over.
#[tokio::test]
async fn test_cancel_then_restart_is_fresh() {
    let steps = [
        Step::TypeSelection,
        Step::ColorMethodSelection,
        Step::AwaitingCustomColors,
        Step::Preview,
        Step::SelectingNewStyle,
    ];
    for target in steps {
        let bot = Arc::new(MockBot::new());
        let m = manager(bot.clone());
        let live = reach(&m, &bot, target).await;

        m.handle_event(&press(CHAT, &live, "cancel_creation"))
            .await
            .unwrap();
        assert!(m.sessions().get(CHAT).is_none(), "{:?}", target);

        if target == Step::Preview {
            // A photo cannot become the notice: it is deleted and a notice is sent.
            assert!(bot.calls().contains(&BotCall::Delete {
                chat_id: CHAT,
                message_id: live,
            }));
            assert_eq!(bot.sent_texts().last().unwrap(), MSG_CANCELLED);
        } else {
            assert!(
                bot.calls().contains(&BotCall::Edit {
                    chat_id: CHAT,
                    message_id: live,
                    text: MSG_CANCELLED.to_string(),
                    keyboard: None,
                }),
                "{:?}",
                target
            );
        }

        m.handle_event(&text(CHAT, "/avatar Bob")).await.unwrap();
        let session = m.sessions().get(CHAT).unwrap();
        assert_eq!(session.name, "Bob");
        assert_eq!(session.state, DialogState::TypeSelection);
        assert!(session.variant().is_none());
        assert!(session.palette().is_none());
        assert!(session.render().is_none());
    }
}

/// **Test: Exporting before any render is a visible error, not a crash, and sends no file.**
#[tokio::test]
async fn test_export_before_render_is_an_error() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    m.handle_event(&text(CHAT, "/avatar Alice")).await.unwrap();
    let menu = bot.last_sent_id().unwrap();

    m.handle_event(&press(CHAT, &menu, "get_current_svg"))
        .await
        .unwrap();

    assert!(bot.documents().is_empty());
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_NO_SVG);
    assert_eq!(bot.answers(), vec![Some(TOAST_UNEXPECTED.to_string())]);
    assert_eq!(step(&m), Some(Step::TypeSelection));

    // Without any session at all.
    m.handle_event(&text(CHAT, "/start")).await.unwrap();
    m.handle_event(&press(CHAT, "1", "get_current_svg"))
        .await
        .unwrap();
    assert!(bot.documents().is_empty());
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_NO_SVG);
}

/// **Test: Export sends the cached SVG with a sanitized name, ends the session and strips the preview buttons.**
#[tokio::test]
async fn test_export_sends_document_and_ends_session() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "John Doe", "beam", "default").await;
    let svg = m.sessions().get(CHAT).unwrap().render().unwrap().svg.clone();

    m.handle_event(&press(CHAT, &preview, "get_current_svg"))
        .await
        .unwrap();

    match bot.documents().as_slice() {
        [BotCall::Document {
            file_name,
            mime_type,
            body,
            caption,
            ..
        }] => {
            assert_eq!(file_name, "John_Doe_beam.svg");
            assert_eq!(mime_type, "image/svg+xml");
            assert_eq!(body, &svg);
            assert!(caption.contains("John Doe"));
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(m.sessions().get(CHAT).is_none());
    assert!(bot.calls().contains(&BotCall::EditKeyboard {
        chat_id: CHAT,
        message_id: preview,
        keyboard: None,
    }));
}

/// **Test: A failed upload keeps the session so the user can retry the export.**
#[tokio::test]
async fn test_export_failure_keeps_session_for_retry() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "Alice", "pixel", "default").await;

    bot.fail(Op::Document);
    m.handle_event(&press(CHAT, &preview, "get_current_svg"))
        .await
        .unwrap();
    assert_eq!(step(&m), Some(Step::Preview));
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_SVG_SEND_FAILED);

    bot.recover(Op::Document);
    m.handle_event(&press(CHAT, &preview, "get_current_svg"))
        .await
        .unwrap();
    assert_eq!(bot.documents().len(), 1);
    assert!(m.sessions().get(CHAT).is_none());
}

/// **Test: A render failure in the initial flow leaves no session; later buttons are unexpected.**
#[tokio::test]
async fn test_initial_render_failure_drops_session() {
    let bot = Arc::new(MockBot::new());
    let mut raster = MockRaster::new();
    raster
        .expect_rasterize()
        .returning(|_| Err(RenderError::Encode("png".to_string())));
    let m = manager_with(bot.clone(), Arc::new(EchoRenderer), Arc::new(raster));

    let menu = start(&m, &bot, "Alice", "marble").await;
    m.handle_event(&press(CHAT, &menu, "select_color_default"))
        .await
        .unwrap();

    assert!(m.sessions().get(CHAT).is_none());
    assert!(bot.photos().is_empty());
    assert!(bot.calls().contains(&BotCall::Edit {
        chat_id: CHAT,
        message_id: menu.clone(),
        text: MSG_RENDER_FAILED.to_string(),
        keyboard: None,
    }));

    m.handle_event(&press(CHAT, &menu, "regenerate_colors"))
        .await
        .unwrap();
    assert_eq!(
        bot.answers().last().unwrap(),
        &Some(TOAST_UNEXPECTED.to_string())
    );
    assert!(m.sessions().is_empty());
}

/// **Test: A preview that cannot be sent drops the session and tells the user.**
#[tokio::test]
async fn test_preview_send_failure_drops_session() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    bot.fail(Op::Photo);
    let menu = start(&m, &bot, "Alice", "ring").await;
    m.handle_event(&press(CHAT, &menu, "select_color_random"))
        .await
        .unwrap();

    assert!(m.sessions().get(CHAT).is_none());
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_PREVIEW_SEND_FAILED);
}

/// **Test: Buttons that do not match the step are acknowledged neutrally and change nothing.**
#[tokio::test]
async fn test_unexpected_buttons_do_not_mutate() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "Alice", "beam", "default").await;
    let before = m.sessions().get(CHAT).unwrap();

    // Style button while in preview.
    m.handle_event(&press(CHAT, &preview, "select_type_ring"))
        .await
        .unwrap();
    // Preview button on an old message.
    m.handle_event(&press(CHAT, "7", "regenerate_colors"))
        .await
        .unwrap();
    // Payload this bot never produced.
    m.handle_event(&press(CHAT, &preview, "select_type_hexagon"))
        .await
        .unwrap();

    assert_eq!(m.sessions().get(CHAT).unwrap(), before);
    let answers = bot.answers();
    assert!(answers[answers.len() - 3..]
        .iter()
        .all(|a| a.as_deref() == Some(TOAST_UNEXPECTED)));
}

/// **Test: A press on a message Telegram no longer has is answered as outdated.**
#[tokio::test]
async fn test_orphan_callback_is_outdated() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    m.handle_event(&press_orphan(CHAT, "cancel_creation"))
        .await
        .unwrap();
    assert_eq!(bot.answers(), vec![Some(TOAST_OUTDATED.to_string())]);
    assert_eq!(bot.calls().len(), 1);
}

/// **Test: Back buttons move between style, color method and custom input.**
#[tokio::test]
async fn test_back_navigation() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let menu = start(&m, &bot, "Alice", "beam").await;

    m.handle_event(&press(CHAT, &menu, "select_color_custom"))
        .await
        .unwrap();
    m.handle_event(&press(CHAT, &menu, "back_to_color_options"))
        .await
        .unwrap();
    match m.sessions().get(CHAT).unwrap().state {
        DialogState::ColorMethodSelection { variant } => assert_eq!(variant, AvatarVariant::Beam),
        other => panic!("unexpected {:?}", other),
    }

    m.handle_event(&press(CHAT, &menu, "back_to_type_selection"))
        .await
        .unwrap();
    assert_eq!(step(&m), Some(Step::TypeSelection));

    // No style yet: routed to the style menu.
    m.handle_event(&press(CHAT, &menu, "back_to_color_options"))
        .await
        .unwrap();
    assert_eq!(step(&m), Some(Step::TypeSelection));
    match bot.calls().last().unwrap() {
        BotCall::Edit { keyboard, .. } => {
            assert_eq!(
                keyboard.as_ref().unwrap().callback_data()[0],
                "select_type_marble"
            )
        }
        other => panic!("unexpected {:?}", other),
    }
}

/// **Test: "Other colors" from the preview deletes the photo and shows the color menu as a new message.**
#[tokio::test]
async fn test_back_to_color_options_from_preview() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    let preview = to_preview(&m, &bot, "Alice", "sunset", "default").await;

    m.handle_event(&press(CHAT, &preview, "back_to_color_options"))
        .await
        .unwrap();

    assert_eq!(step(&m), Some(Step::ColorMethodSelection));
    assert!(bot.calls().contains(&BotCall::Delete {
        chat_id: CHAT,
        message_id: preview,
    }));
    match bot.calls().last().unwrap() {
        BotCall::Send { keyboard, .. } => {
            assert_eq!(
                keyboard.as_ref().unwrap().callback_data()[0],
                "select_color_random"
            )
        }
        other => panic!("unexpected {:?}", other),
    }
}

/// **Test: Commands: /start resets, /help does not, bare /avatar shows usage, stray text is ignored.**
#[tokio::test]
async fn test_commands_and_stray_text() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());

    m.handle_event(&text(CHAT, "/avatar")).await.unwrap();
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_AVATAR_USAGE);
    assert!(m.sessions().is_empty());

    m.handle_event(&text(CHAT, "/avatar   Alice  ")).await.unwrap();
    assert_eq!(m.sessions().get(CHAT).unwrap().name, "Alice");

    m.handle_event(&text(CHAT, "/help")).await.unwrap();
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_GREETING);
    assert!(m.sessions().contains(CHAT));

    let before = bot.calls().len();
    m.handle_event(&text(CHAT, "hello there")).await.unwrap();
    m.handle_event(&text(CHAT, "/unknown")).await.unwrap();
    assert_eq!(bot.calls().len(), before);

    m.handle_event(&text(CHAT, "/start")).await.unwrap();
    assert_eq!(bot.sent_texts().last().unwrap(), MSG_GREETING);
    assert!(!m.sessions().contains(CHAT));
}

/// **Test: Sessions are keyed by chat; one chat's dialog does not touch another's.**
#[tokio::test]
async fn test_sessions_are_per_chat() {
    let bot = Arc::new(MockBot::new());
    let m = manager(bot.clone());
    m.handle_event(&text(1, "/avatar One")).await.unwrap();
    m.handle_event(&text(2, "/avatar Two")).await.unwrap();
    m.handle_event(&press(1, "100", "cancel_creation"))
        .await
        .unwrap();
    assert!(!m.sessions().contains(1));
    assert_eq!(m.sessions().get(2).unwrap().name, "Two");
}
