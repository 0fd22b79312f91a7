//! CLI Command Tests
//!
//! Runs every command handler against a mocked TMDB and checks the
//! semantic exit codes scripts rely on.

// =============================================================================
// CLI Argument Parsing Tests
// =============================================================================

mod cli_parsing {
    use clap::Parser;
    use marquee::cli::{Cli, Command};

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from::<_, &str>([]);
        assert!(!cli.is_cli_mode());
    }

    #[test]
    fn test_search_defaults() {
        let cli = Cli::parse_from(["marquee", "search", "blade runner"]);
        match cli.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.query, "blade runner");
                assert_eq!(cmd.limit, 20);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["marquee", "search"]).is_err());
    }

    #[test]
    fn test_now_playing_limit() {
        let cli = Cli::parse_from(["marquee", "now-playing", "--limit", "3"]);
        match cli.command {
            Some(Command::NowPlaying(cmd)) => assert_eq!(cmd.limit, 3),
            _ => panic!("Expected NowPlaying command"),
        }
    }
}

// =============================================================================
// Command Handler Tests
// =============================================================================

mod handlers {
    use mockito::{Matcher, Server, ServerGuard};
    use marquee::api::TmdbClient;
    use marquee::cli::{
        ExitCode, InfoCmd, NowPlayingCmd, Output, RandomCmd, SearchCmd, SuggestCmd,
    };
    use marquee::commands;
    use marquee::models::ImageBase;
    use marquee::query::{PagePicker, QueryClient};

    struct FirstPage;

    impl PagePicker for FirstPage {
        fn page(&self) -> u32 {
            1
        }

        fn index(&self, _len: usize) -> usize {
            0
        }
    }

    fn output() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    fn client(server: &ServerGuard) -> QueryClient<TmdbClient> {
        QueryClient::new(TmdbClient::with_base_url("test_key", server.url()))
    }

    const ONE_MOVIE: &str = r#"{"results": [{"id": 78, "title": "Blade Runner", "release_date": "1982-06-25", "overview": "", "poster_path": "/br.jpg"}]}"#;

    const DETAILS: &str = r#"{
        "id": 78,
        "title": "Blade Runner",
        "release_date": "1982-06-25",
        "budget": 28000000,
        "revenue": 41722424,
        "runtime": 117,
        "credits": {
            "cast": [{"id": 3, "name": "Harrison Ford", "character": "Rick Deckard", "profile_path": null}],
            "crew": [{"job": "Director", "name": "Ridley Scott"}]
        }
    }"#;

    #[tokio::test]
    async fn test_search_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::UrlEncoded("query".into(), "blade runner".into()))
            .with_status(200)
            .with_body(ONE_MOVIE)
            .create_async()
            .await;

        let cmd = SearchCmd {
            query: "  blade runner ".into(),
            limit: 5,
        };
        let code = commands::search_cmd(&client(&server), &ImageBase::default(), cmd, &output()).await;

        mock.assert_async().await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": []}"#)
            .create_async()
            .await;

        let cmd = SearchCmd {
            query: "zzzznomatch".into(),
            limit: 20,
        };
        let code = commands::search_cmd(&client(&server), &ImageBase::default(), cmd, &output()).await;
        assert_eq!(code, ExitCode::NoResults);
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let cmd = SearchCmd {
            query: "   ".into(),
            limit: 20,
        };
        let code = commands::search_cmd(&client(&server), &ImageBase::default(), cmd, &output()).await;

        mock.assert_async().await;
        assert_eq!(code, ExitCode::InvalidArgs);
    }

    #[tokio::test]
    async fn test_search_server_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;

        let cmd = SearchCmd {
            query: "heat".into(),
            limit: 20,
        };
        let code = commands::search_cmd(&client(&server), &ImageBase::default(), cmd, &output()).await;
        assert_eq!(code, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_suggest_empty_is_success() {
        let server = Server::new_async().await;
        let cmd = SuggestCmd { query: "".into() };
        let code = commands::suggest_cmd(&client(&server), cmd, &output()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_now_playing() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/movie/now_playing")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(ONE_MOVIE)
            .create_async()
            .await;

        let code = commands::now_playing_cmd(
            &client(&server),
            &ImageBase::default(),
            NowPlayingCmd { limit: 1 },
            &output(),
        )
        .await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_info_success_and_not_found() {
        let mut server = Server::new_async().await;
        let _found = server
            .mock("GET", "/movie/78")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(DETAILS)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/movie/1")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let client = client(&server);
        let images = ImageBase::default();

        let code = commands::info_cmd(&client, &images, InfoCmd { id: 78 }, &output()).await;
        assert_eq!(code, ExitCode::Success);

        let code = commands::info_cmd(&client, &images, InfoCmd { id: 1 }, &output()).await;
        assert_eq!(code, ExitCode::NetworkError);
    }

    #[test]
    fn test_bad_config_path_is_invalid_args() {
        let missing = std::path::Path::new("/nonexistent/marquee/config.toml");
        let result = commands::load_config(Some(missing), &output());
        assert_eq!(result.err(), Some(ExitCode::InvalidArgs));
    }

    #[test]
    fn test_config_path_is_loaded() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs = 7").unwrap();

        let config = commands::load_config(Some(file.path()), &output()).unwrap();
        assert_eq!(config.timeout_secs, 7);
    }

    #[tokio::test]
    async fn test_random() {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/movie/popular")
            .match_query(Matcher::UrlEncoded("page".into(), "1".into()))
            .with_status(200)
            .with_body(ONE_MOVIE)
            .create_async()
            .await;
        let details = server
            .mock("GET", "/movie/78")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(DETAILS)
            .expect(1)
            .create_async()
            .await;

        let client = QueryClient::with_picker(
            TmdbClient::with_base_url("test_key", server.url()),
            FirstPage,
        );
        let code = commands::random_cmd(&client, &ImageBase::default(), RandomCmd {}, &output()).await;

        details.assert_async().await;
        assert_eq!(code, ExitCode::Success);
    }
}
