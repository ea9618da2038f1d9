use clap::Parser;

pub const DEFAULT_MIRROR: &str = "http://ftp.uk.debian.org/debian/dists/stable/main";
pub const N_PACKAGES: i64 = 10;

/// Display package names with the number of files associated with them
/// for a given Debian mirror and architecture.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The binary architecture or the pseudo-architecture of the Debian system (e.g. amd64, arm64, mips).
    pub arch: String,

    /// To search for udeb instead of normal Contents file.
    #[arg(short, long)]
    pub udeb: bool,

    /// The mirror to search for the Contents file.
    #[arg(short, long, default_value = DEFAULT_MIRROR)]
    pub mirror: String,

    /// The number of packages to display.
    #[arg(
        short = 'n',
        long = "number-of-packages",
        default_value_t = N_PACKAGES,
        allow_negative_numbers = true
    )]
    pub number_of_packages: i64,
}

impl Config {
    /// Location of the Contents file on the mirror.
    pub fn contents_url(&self) -> String {
        let arch = if self.udeb {
            format!("udeb-{}", self.arch)
        } else {
            self.arch.clone()
        };
        format!("{}/Contents-{}.gz", self.mirror.trim_end_matches('/'), arch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("package-statistics").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults() {
        let config = config(&["amd64"]);

        assert_eq!(config.arch, "amd64");
        assert!(!config.udeb);
        assert_eq!(config.mirror, DEFAULT_MIRROR);
        assert_eq!(config.number_of_packages, N_PACKAGES);
        assert_eq!(
            config.contents_url(),
            "http://ftp.uk.debian.org/debian/dists/stable/main/Contents-amd64.gz"
        );
    }

    #[test]
    fn udeb_contents_url() {
        let config = config(&["-u", "arm64"]);

        assert_eq!(
            config.contents_url(),
            "http://ftp.uk.debian.org/debian/dists/stable/main/Contents-udeb-arm64.gz"
        );
    }

    #[test]
    fn custom_mirror_with_trailing_slash() {
        let config = config(&["mips", "--mirror", "http://deb.example.org/debian/dists/sid/main/"]);

        assert_eq!(
            config.contents_url(),
            "http://deb.example.org/debian/dists/sid/main/Contents-mips.gz"
        );
    }

    #[test]
    fn accepts_negative_number_of_packages() {
        assert_eq!(config(&["amd64", "-n", "-2"]).number_of_packages, -2);
        assert_eq!(
            config(&["amd64", "--number-of-packages", "25"]).number_of_packages,
            25
        );
    }

    #[test]
    fn architecture_is_required() {
        assert!(Config::try_parse_from(["package-statistics"]).is_err());
    }
}
