use icu_login::form::{render_message, Message, MessageKind};
use icu_login::soap::envelope;
use icu_login::soap::parsing::return_text;

#[test]
fn return_text_extraction() {
    let reply = r#"<?xml version="1.0"?>
<SOAP-ENV:Envelope xmlns:SOAP-ENV="http://schemas.xmlsoap.org/soap/envelope/">
  <SOAP-ENV:Body>
    <NS1:LoginResponse xmlns:NS1="urn:ICUTech.Intf-IICUTech">
      <return>{"EntityId":1,"Name":"A &amp; B"}</return>
      <return>second</return>
    </NS1:LoginResponse>
  </SOAP-ENV:Body>
</SOAP-ENV:Envelope>"#;
    assert_eq!(return_text(reply).as_deref(), Some(r#"{"EntityId":1,"Name":"A & B"}"#));

    // prefixed, deeply nested, mixed content
    let reply = "<a><b><c><ns:return> x <i>y</i><![CDATA[<z>]]> </ns:return></c></b></a>";
    assert_eq!(return_text(reply).as_deref(), Some(" x y<z> "));

    assert_eq!(return_text("<Body><return/></Body>").as_deref(), Some(""));
    assert_eq!(return_text("<Body><returned>no</returned></Body>"), None);
    assert_eq!(return_text("<Body><return>unterminated"), None);
    assert_eq!(return_text("ACCESS DENIED"), None);
    assert_eq!(return_text(""), None);
}

#[test]
fn envelope_layout() {
    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>
<SOAP-ENV:Envelope \n    xmlns:SOAP-ENV=\"http://schemas.xmlsoap.org/soap/envelope/\" \n    xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \n    xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">
    <SOAP-ENV:Body>
        <NS1:Login xmlns:NS1=\"urn:ICUTech.Intf-IICUTech\">
            <UserName xsi:type=\"xsd:string\">dave</UserName>
            <Password xsi:type=\"xsd:string\">p<w&d</Password>
            <IPs xsi:type=\"xsd:string\">0.0.0.0</IPs>
        </NS1:Login>
    </SOAP-ENV:Body>
</SOAP-ENV:Envelope>";
    assert_eq!(envelope::build("dave", "p<w&d", "0.0.0.0", false), expected);
}

#[test]
fn message_markup() {
    let m = Message::new(MessageKind::Danger, "Login failed: Invalid credentials", Some("<b>nope</b>".to_owned()));
    assert_eq!(
        render_message(&m),
        concat!(
            r#"<div class="alert alert-danger" role="alert">Login failed: Invalid credentials"#,
            r#"<div class="entity-details"><pre>&lt;b&gt;nope&lt;/b&gt;</pre></div></div>"#,
        )
    );

    let m = Message::new(MessageKind::Success, "ok", None);
    assert_eq!(render_message(&m), r#"<div class="alert alert-success" role="alert">ok</div>"#);
}

#[test]
fn relay_url_encoding() {
    use icu_login::config::Endpoints;

    assert_eq!(
        Endpoints::default().target_url(),
        "https://corsproxy.io/?http%3A%2F%2Fisapi.mekashron.com%2Ficu-tech%2Ficutech-test.dll%2Fsoap%2FIICUTech"
    );
    let endpoints = Endpoints { soap_url: "http://h/a(b)!*'~ c?x=%".to_owned(), ..Endpoints::default() };
    assert_eq!(endpoints.target_url(), "https://corsproxy.io/?http%3A%2F%2Fh%2Fa(b)!*'~%20c%3Fx%3D%25");
}

#[cfg(feature = "config-files")]
mod config {
    use std::path::PathBuf;
    use icu_login::config::{Config, ConfigError, DEFAULT_CORS_PROXY, DEFAULT_IP_LOOKUP};

    fn write_tmp(name: &str, content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("icu_login-tests-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let p = dir.join(name);
        std::fs::write(&p, content).unwrap();
        p
    }

    #[test]
    fn yaml_overrides_only_named_fields() {
        let p = write_tmp("config.yaml", "
endpoints:
  soap_url: http://localhost:8080/soap/IICUTech
settings:
  escape_credentials: true
  timeout: 5
");
        let cfg = Config::try_from(p.to_str().unwrap()).unwrap();
        assert_eq!(cfg.endpoints.soap_url, "http://localhost:8080/soap/IICUTech");
        assert_eq!(cfg.endpoints.cors_proxy, DEFAULT_CORS_PROXY);
        assert_eq!(cfg.endpoints.ip_lookup, DEFAULT_IP_LOOKUP);
        assert!(cfg.settings.escape_credentials);
        assert_eq!(cfg.settings.timeout(), Some(std::time::Duration::from_secs(5)));
    }

    #[test]
    fn toml_and_json() {
        let p = write_tmp("config.toml", "[endpoints]\ncors_proxy = \"\"\n");
        let cfg = Config::try_from(p.to_str().unwrap()).unwrap();
        assert_eq!(
            cfg.endpoints.target_url(),
            "http://isapi.mekashron.com/icu-tech/icutech-test.dll/soap/IICUTech"
        );
        assert!(!cfg.settings.escape_credentials);

        let p = write_tmp("config.json", r#"{"settings": {"timeout": 30}}"#);
        let cfg = Config::try_from(p.to_str().unwrap()).unwrap();
        assert_eq!(cfg.endpoints, Config::default().endpoints);
        assert_eq!(cfg.settings.timeout, Some(30));
    }

    #[test]
    fn bad_paths() {
        assert!(matches!(
            Config::try_from("/nonexistent/icu_login/config.yaml"),
            Err(ConfigError::FileNotFound(..))
        ));
        let dir = std::env::temp_dir();
        assert!(matches!(
            Config::try_from(dir.to_str().unwrap()),
            Err(ConfigError::PathIsDirectory(..))
        ));
        let p = write_tmp("broken.json", "{ not json");
        assert!(matches!(
            Config::try_from(p.to_str().unwrap()),
            Err(ConfigError::SerdeJsonError(..))
        ));
    }

    #[test]
    fn default_path() {
        assert_eq!(
            Config::default_path(Some(PathBuf::from("/home/erin"))),
            PathBuf::from("/home/erin/.config/icu_login/config.yaml")
        );
    }
}

#[cfg(feature = "log")]
#[test]
fn verbosity_levels() {
    use icu_login::logger::level_for;
    use log::LevelFilter;

    assert_eq!(level_for(0, false), LevelFilter::Warn);
    assert_eq!(level_for(1, false), LevelFilter::Info);
    assert_eq!(level_for(2, false), LevelFilter::Debug);
    assert_eq!(level_for(5, false), LevelFilter::Trace);
    assert_eq!(level_for(2, true), LevelFilter::Off);
}
