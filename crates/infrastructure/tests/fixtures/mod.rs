#![allow(dead_code)]
use std::fs;
use std::path::Path;

pub const EXAMPLE_COM: &str = r#"; Primary zone for example.com
zone example.com.
ttl 3600

@       A     192.0.2.10
@       AAAA  2001:db8::10
@       NS    ns1.example.com.
@       MX    mail.example.com.   7200
www     CNAME @
mail    A     192.0.2.25          ; mail host
*.dev   A     192.0.2.99          60
spf     TXT   "v=spf1 mx -all"
note    TXT   "semi ; colons \"and\" quotes"
"#;

pub const SUB_EXAMPLE_COM: &str = "zone b.example.com.\nhost A 192.0.2.50\n";

pub const EXAMPLE_ORG: &str = "zone example.org\nttl 300\n@ A 198.51.100.1\n";

pub const DUPLICATE_ZONE_LINE: &str = "zone example.com.\nzone example.net.\n";

/// Writes `(file name, contents)` pairs under `dir`, creating parent
/// directories as needed.
pub fn write_zone_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, contents) in files {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}
