use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use md5::{Digest, Md5};
use url::Url;

use jam_config::VideoLinkConfig;

use super::params::ParamSet;

/// Base URL of the VDO.Ninja web service.
pub const BASE_URL: &str = "https://vdo.ninja/";

/// VDO.Ninja documentation, linked from the settings panel.
pub const DOCS_URL: &str = "https://docs.vdo.ninja";

/// Room names are namespaced away from unrelated VDO.Ninja rooms.
const ROOM_PREFIX: &str = "SB_";

/// Font size used for the name-label overlay.
const LABEL_FONT_SIZE: &str = "40";

/// Derive a short reproducible pseudonymous id for a participant.
///
/// Combines the group and the display name (plus an `@S` marker for the
/// screen-share variant) and takes the first half of the base64 of the
/// MD5 digest, 12 characters. Stable for a given (group, name, flag)
/// triple, so the remote service can correlate the same participant
/// across reconnects without a reversible identifier. `+`, `/` and `=`
/// are replaced with `X`, `Y` and `Z` to keep the id URL-safe.
pub fn derive_id(display_name: &str, group: &str, screen_share: bool) -> String {
    let marker = if screen_share { "@S" } else { "" };
    let source = format!("{group}{display_name}{marker}");
    let digest = Md5::digest(source.as_bytes());
    let encoded = BASE64.encode(digest);
    let half = encoded.len() / 2;
    encoded[..half]
        .chars()
        .map(|c| match c {
            '+' => 'X',
            '/' => 'Y',
            '=' => 'Z',
            other => other,
        })
        .collect()
}

/// Parse user-supplied `&`-delimited `key=value` pairs.
///
/// Tokens are trimmed and empty ones skipped; each token splits on the
/// first `=` (no `=` means an empty value). Never fails, the user is
/// trusted.
pub fn parse_extra_params(raw: &str) -> Vec<(String, String)> {
    raw.split('&')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| match token.split_once('=') {
            Some((key, value)) => (key.trim().to_string(), value.trim().to_string()),
            None => (token.to_string(), String::new()),
        })
        .collect()
}

/// Build the shareable VDO.Ninja URL for the current session.
///
/// Pure and total: any combination of options and identity strings
/// produces a URL. `peers` is the remote peer roster in enumeration
/// order; in push/view mode each peer contributes a webcam id
/// immediately followed by its screen-share id.
pub fn build_share_link(
    config: &VideoLinkConfig,
    username: &str,
    group: &str,
    peers: &[String],
) -> Url {
    let mut params = ParamSet::new();

    params.set("label", username);

    if config.show_names {
        params.set("sl", ""); // show labels
        params.set("fontsize", LABEL_FONT_SIZE);
    }

    if config.room_mode {
        let room_name = format!("{ROOM_PREFIX}{group}");
        if config.be_director {
            params.set("dir", room_name);
            params.set("sd", "");
        } else {
            params.set("room", room_name);

            if config.screen_share_mode {
                params.set("ss", ""); // go to screenshare automatically
                params.set("nvb", ""); // no video button
                params.set("nosettings", ""); // no settings button
                params.set("ssb", ""); // allow changing screenshare later
                if !config.large_share {
                    params.set("smallshare", ""); // normal-sized share
                }
            } else {
                params.set("wc", ""); // go to webcam selection immediately
                params.set("ssb", ""); // allow screenshare later
            }
        }

        if config.share_only {
            params.set("view", ""); // push only, view nothing
        }
    } else {
        let mut others = Vec::with_capacity(peers.len() * 2);
        for peer in peers {
            others.push(derive_id(peer, group, false));
            others.push(derive_id(peer, group, true));
        }

        if config.screen_share_mode {
            params.set("ss", "");
            params.set("nvb", "");
            params.set("ssb", "");
            params.set("nosettings", "");
            if !config.large_share {
                params.set("smallshare", "");
            }
        } else {
            params.set("wc", "");
            params.set("ssb", "");
        }

        // An empty roster is never serialized as an empty view list.
        if !config.share_only && !others.is_empty() {
            params.set("view", others.join(","));
        }
    }

    // The host session carries the audio, the web link must stay silent.
    params.set("adevice", "0");
    params.set("nmb", ""); // no mic button
    params.set("nsb", ""); // no speaker button
    params.set("noaudio", "");
    params.set("deaf", "");
    params.set("noap", ""); // no audio processing
    params.set("autohide", "");
    params.set("fsb", ""); // fullscreen button

    // Escape hatch for advanced users: may overwrite anything above.
    for (key, value) in parse_extra_params(&config.extra_params) {
        params.set(key, value);
    }

    params.set("push", derive_id(username, group, config.screen_share_mode));

    let mut url = Url::parse(BASE_URL).expect("base URL is valid");
    url.query_pairs_mut().extend_pairs(params.iter());
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789XYZ";

    fn assert_valid_id(id: &str) {
        assert_eq!(id.len(), 12, "id {id:?} should be 12 chars");
        assert!(
            id.chars().all(|c| ID_ALPHABET.contains(c)),
            "id {id:?} contains characters outside [A-Za-z0-9XYZ]"
        );
    }

    fn query(url: &Url) -> Vec<(String, String)> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    fn get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn has(pairs: &[(String, String)], key: &str) -> bool {
        get(pairs, key).is_some()
    }

    #[test]
    fn derive_id_is_deterministic() {
        let a = derive_id("alice", "g1", false);
        let b = derive_id("alice", "g1", false);
        assert_eq!(a, b);
        assert_valid_id(&a);
    }

    #[test]
    fn derive_id_screenshare_variant_differs() {
        let webcam = derive_id("alice", "g1", false);
        let screen = derive_id("alice", "g1", true);
        assert_ne!(webcam, screen);
        assert_valid_id(&screen);
    }

    #[test]
    fn derive_id_depends_on_group_and_name() {
        assert_ne!(derive_id("alice", "g1", false), derive_id("alice", "g2", false));
        assert_ne!(derive_id("alice", "g1", false), derive_id("bob", "g1", false));
    }

    #[test]
    fn derive_id_alphabet_over_many_inputs() {
        for i in 0..64 {
            assert_valid_id(&derive_id(&format!("user{i}"), "group", i % 2 == 0));
            assert_valid_id(&derive_id(&format!("ユーザー{i}"), "グループ", false));
        }
    }

    #[test]
    fn derive_id_empty_inputs_still_total() {
        assert_valid_id(&derive_id("", "", false));
        assert_valid_id(&derive_id("", "", true));
    }

    #[test]
    fn parse_extra_params_empty() {
        assert!(parse_extra_params("").is_empty());
        assert!(parse_extra_params("   ").is_empty());
        assert!(parse_extra_params("&&&").is_empty());
    }

    #[test]
    fn parse_extra_params_pairs() {
        let parsed = parse_extra_params("quality=2&bitrate=500");
        assert_eq!(
            parsed,
            vec![
                ("quality".to_string(), "2".to_string()),
                ("bitrate".to_string(), "500".to_string()),
            ]
        );
    }

    #[test]
    fn parse_extra_params_trims_whitespace() {
        let parsed = parse_extra_params(" quality = 2 & flag ");
        assert_eq!(
            parsed,
            vec![
                ("quality".to_string(), "2".to_string()),
                ("flag".to_string(), String::new()),
            ]
        );
    }

    #[test]
    fn parse_extra_params_splits_on_first_equals() {
        let parsed = parse_extra_params("k=v=w");
        assert_eq!(parsed, vec![("k".to_string(), "v=w".to_string())]);
    }

    #[test]
    fn parse_extra_params_value_absent() {
        let parsed = parse_extra_params("novalue");
        assert_eq!(parsed, vec![("novalue".to_string(), String::new())]);
        let parsed = parse_extra_params("empty=");
        assert_eq!(parsed, vec![("empty".to_string(), String::new())]);
    }

    #[test]
    fn director_link_uses_dir_not_room() {
        let config = VideoLinkConfig {
            room_mode: true,
            be_director: true,
            ..Default::default()
        };
        let url = build_share_link(&config, "alice", "teamA", &[]);
        let pairs = query(&url);
        assert_eq!(get(&pairs, "dir"), Some("SB_teamA"));
        assert!(has(&pairs, "sd"));
        assert!(!has(&pairs, "room"));
    }

    #[test]
    fn participant_room_link_uses_room_not_dir() {
        let config = VideoLinkConfig {
            room_mode: true,
            ..Default::default()
        };
        let url = build_share_link(&config, "alice", "teamA", &[]);
        let pairs = query(&url);
        assert_eq!(get(&pairs, "room"), Some("SB_teamA"));
        assert!(!has(&pairs, "dir"));
        assert!(!has(&pairs, "sd"));
        assert!(has(&pairs, "wc"));
        assert!(has(&pairs, "ssb"));
    }

    #[test]
    fn room_screenshare_defaults_to_small() {
        let config = VideoLinkConfig {
            room_mode: true,
            screen_share_mode: true,
            ..Default::default()
        };
        let pairs = query(&build_share_link(&config, "alice", "g", &[]));
        for key in ["ss", "nvb", "nosettings", "ssb", "smallshare"] {
            assert!(has(&pairs, key), "missing {key}");
        }
        assert!(!has(&pairs, "wc"));
    }

    #[test]
    fn room_screenshare_large_omits_smallshare() {
        let config = VideoLinkConfig {
            room_mode: true,
            screen_share_mode: true,
            large_share: true,
            ..Default::default()
        };
        let pairs = query(&build_share_link(&config, "alice", "g", &[]));
        assert!(has(&pairs, "ss"));
        assert!(!has(&pairs, "smallshare"));
    }

    #[test]
    fn room_share_only_sets_empty_view() {
        let config = VideoLinkConfig {
            room_mode: true,
            share_only: true,
            ..Default::default()
        };
        let pairs = query(&build_share_link(&config, "alice", "g", &[]));
        assert_eq!(get(&pairs, "view"), Some(""));
    }

    #[test]
    fn push_view_lists_peer_ids_in_order() {
        let config = VideoLinkConfig::default();
        let peers = vec!["bob".to_string(), "carol".to_string()];
        let pairs = query(&build_share_link(&config, "alice", "g1", &peers));

        let view = get(&pairs, "view").expect("view parameter present");
        let ids: Vec<&str> = view.split(',').collect();
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[0], derive_id("bob", "g1", false));
        assert_eq!(ids[1], derive_id("bob", "g1", true));
        assert_eq!(ids[2], derive_id("carol", "g1", false));
        assert_eq!(ids[3], derive_id("carol", "g1", true));
        for id in ids {
            assert_valid_id(id);
        }
    }

    #[test]
    fn push_view_duplicate_peer_names_keep_both_entries() {
        let config = VideoLinkConfig::default();
        let peers = vec!["bob".to_string(), "bob".to_string()];
        let pairs = query(&build_share_link(&config, "alice", "g1", &peers));
        let view = get(&pairs, "view").unwrap();
        assert_eq!(view.split(',').count(), 4);
    }

    #[test]
    fn push_view_no_peers_omits_view() {
        let config = VideoLinkConfig::default();
        let pairs = query(&build_share_link(&config, "alice", "g1", &[]));
        assert!(!has(&pairs, "view"));
    }

    #[test]
    fn push_view_share_only_suppresses_view_even_with_peers() {
        let config = VideoLinkConfig {
            share_only: true,
            ..Default::default()
        };
        let peers = vec!["bob".to_string()];
        let pairs = query(&build_share_link(&config, "alice", "g1", &peers));
        assert!(!has(&pairs, "view"));
    }

    #[test]
    fn show_names_sets_labels_and_fontsize() {
        let config = VideoLinkConfig {
            show_names: true,
            ..Default::default()
        };
        let pairs = query(&build_share_link(&config, "alice", "g1", &[]));
        assert!(has(&pairs, "sl"));
        assert_eq!(get(&pairs, "fontsize"), Some("40"));
    }

    #[test]
    fn audio_is_always_suppressed() {
        for room_mode in [false, true] {
            let config = VideoLinkConfig {
                room_mode,
                ..Default::default()
            };
            let pairs = query(&build_share_link(&config, "alice", "g1", &[]));
            assert_eq!(get(&pairs, "adevice"), Some("0"));
            for key in ["nmb", "nsb", "noaudio", "deaf", "noap", "autohide", "fsb"] {
                assert!(has(&pairs, key), "missing {key}");
            }
        }
    }

    #[test]
    fn extra_params_can_inject_and_overwrite() {
        let config = VideoLinkConfig {
            extra_params: "room=override&adevice=1".to_string(),
            ..Default::default()
        };
        let pairs = query(&build_share_link(&config, "alice", "g1", &[]));
        // push/view mode never sets "room" itself, the extra param injects it
        assert_eq!(get(&pairs, "room"), Some("override"));
        assert_eq!(get(&pairs, "adevice"), Some("1"));
    }

    #[test]
    fn push_is_set_after_extra_params() {
        let config = VideoLinkConfig {
            extra_params: "push=spoofed".to_string(),
            ..Default::default()
        };
        let pairs = query(&build_share_link(&config, "alice", "g1", &[]));
        assert_eq!(get(&pairs, "push"), Some(derive_id("alice", "g1", false).as_str()));
    }

    #[test]
    fn push_id_follows_screen_share_mode() {
        let webcam = VideoLinkConfig::default();
        let screen = VideoLinkConfig {
            screen_share_mode: true,
            ..Default::default()
        };
        let webcam_pairs = query(&build_share_link(&webcam, "alice", "g1", &[]));
        let screen_pairs = query(&build_share_link(&screen, "alice", "g1", &[]));
        assert_eq!(
            get(&webcam_pairs, "push"),
            Some(derive_id("alice", "g1", false).as_str())
        );
        assert_eq!(
            get(&screen_pairs, "push"),
            Some(derive_id("alice", "g1", true).as_str())
        );
    }

    #[test]
    fn push_view_webcam_end_to_end() {
        let config = VideoLinkConfig::default();
        let peers = vec!["bob".to_string()];
        let url = build_share_link(&config, "alice", "g1", &peers);

        assert!(url.as_str().starts_with(BASE_URL));
        let pairs = query(&url);
        assert_eq!(get(&pairs, "label"), Some("alice"));
        assert!(has(&pairs, "wc"));
        assert!(has(&pairs, "ssb"));
        assert_eq!(get(&pairs, "adevice"), Some("0"));
        assert!(has(&pairs, "noaudio"));

        let view: Vec<&str> = get(&pairs, "view").unwrap().split(',').collect();
        assert_eq!(view.len(), 2);
        for id in view {
            assert_valid_id(id);
        }
        assert_valid_id(get(&pairs, "push").unwrap());
    }

    #[test]
    fn build_is_deterministic() {
        let config = VideoLinkConfig {
            show_names: true,
            extra_params: "quality=2".to_string(),
            ..Default::default()
        };
        let peers = vec!["bob".to_string()];
        let a = build_share_link(&config, "alice", "g1", &peers);
        let b = build_share_link(&config, "alice", "g1", &peers);
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn username_with_spaces_is_encoded() {
        let config = VideoLinkConfig::default();
        let url = build_share_link(&config, "alice smith", "g 1", &[]);
        let pairs = query(&url);
        assert_eq!(get(&pairs, "label"), Some("alice smith"));
        assert!(!url.as_str().contains(' '));
    }
}
