pub(crate) const FLUOR_URL_ENVIRONMENT: &str = "FLUOR_URL";

/// get_gateway_url picks the gateway from the flag, the config file, the environment and
/// finally the default, in that order. A flag left at its default value does not count as set
pub(crate) fn get_gateway_url(
    argument_url: &str,
    default_url: &str,
    config_url: &str,
    environment_url: &str,
) -> String {
    let gateway_url = if !argument_url.is_empty() && argument_url != default_url {
        argument_url
    } else if !config_url.is_empty() && config_url != default_url {
        config_url
    } else if !environment_url.is_empty() {
        environment_url
    } else {
        default_url
    };

    let gateway_url = gateway_url.trim_end_matches('/');
    if gateway_url.contains("://") {
        gateway_url.to_string()
    } else {
        format!("http://{}", gateway_url)
    }
}

pub(crate) fn get_token(flag_token: &str, config_token: &str) -> String {
    if !flag_token.is_empty() {
        flag_token.into()
    } else {
        config_token.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "http://127.0.0.1:8080";

    #[test]
    fn test_get_gateway_url() {
        struct TestCase {
            _name: &'static str,
            argument: &'static str,
            config: &'static str,
            env: &'static str,
            want: &'static str,
        }
        let tests = vec![
            TestCase {
                _name: "nothing set",
                argument: DEFAULT,
                config: "",
                env: "",
                want: DEFAULT,
            },
            TestCase {
                _name: "flag wins",
                argument: "http://flag:8080",
                config: "http://config:8080",
                env: "http://env:8080",
                want: "http://flag:8080",
            },
            TestCase {
                _name: "config beats environment",
                argument: DEFAULT,
                config: "http://config:8080",
                env: "http://env:8080",
                want: "http://config:8080",
            },
            TestCase {
                _name: "environment when nothing else",
                argument: DEFAULT,
                config: "",
                env: "https://env.example.com/",
                want: "https://env.example.com",
            },
            TestCase {
                _name: "scheme added",
                argument: "gateway.local:8080",
                config: "",
                env: "",
                want: "http://gateway.local:8080",
            },
            TestCase {
                _name: "https kept with base path",
                argument: "https://api.example.com/platform/",
                config: "",
                env: "",
                want: "https://api.example.com/platform",
            },
        ];

        for case in tests {
            let got = get_gateway_url(case.argument, DEFAULT, case.config, case.env);
            assert_eq!(got, case.want, "{}", case._name);
        }
    }

    #[test]
    fn test_get_token() {
        assert_eq!(get_token("flag", "config"), "flag");
        assert_eq!(get_token("", "config"), "config");
        assert_eq!(get_token("", ""), "");
    }
}
