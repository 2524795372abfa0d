//! Parser for `pactl` text output.
//!
//! `pactl list sinks|sources` prints one block per device, opened by a
//! `Sink #N` / `Source #N` header line and followed by indented `Key: value`
//! lines. Deeper-indented lines (port lists, property maps) belong to the
//! preceding key and are skipped.

/// One `Sink #N` / `Source #N` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceBlock {
    pub index: Option<u32>,
    fields: Vec<(String, String)>,
}

impl DeviceBlock {
    /// First value recorded for `key`.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn name(&self) -> Option<&str> {
        self.field("Name").filter(|v| !v.is_empty())
    }

    pub fn description(&self) -> Option<&str> {
        self.field("Description").filter(|v| !v.is_empty())
    }

    pub fn active_port(&self) -> Option<&str> {
        self.field("Active Port").filter(|v| !v.is_empty())
    }

    pub fn muted(&self) -> Option<bool> {
        self.field("Mute").and_then(parse_yes_no)
    }
}

fn indent_width(line: &str) -> usize {
    line.len() - line.trim_start().len()
}

fn parse_header(line: &str, header: &str) -> Option<Option<u32>> {
    let rest = line.strip_prefix(header)?.strip_prefix(" #")?;
    Some(rest.trim().parse().ok())
}

/// Split `output` into blocks opened by `"<header> #"` lines.
pub fn parse_blocks(output: &str, header: &str) -> Vec<DeviceBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<DeviceBlock> = None;
    let mut base_indent: Option<usize> = None;

    for line in output.lines() {
        if let Some(index) = parse_header(line, header) {
            if let Some(block) = current.take() {
                blocks.push(block);
            }
            current = Some(DeviceBlock {
                index,
                fields: Vec::new(),
            });
            base_indent = None;
            continue;
        }

        let Some(block) = current.as_mut() else {
            continue;
        };
        if line.trim().is_empty() {
            continue;
        }

        let indent = indent_width(line);
        let base = *base_indent.get_or_insert(indent);
        if indent > base {
            continue;
        }

        if let Some((key, value)) = line.trim().split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                block.fields.push((key.to_string(), value.trim().to_string()));
            }
        }
    }

    if let Some(block) = current {
        blocks.push(block);
    }
    blocks
}

/// Block whose `Name:` equals `name`.
pub fn find_device<'a>(blocks: &'a [DeviceBlock], name: &str) -> Option<&'a DeviceBlock> {
    blocks.iter().find(|block| block.name() == Some(name))
}

/// `analog-output-speaker` -> `Speaker`.
pub fn pretty_port(port: &str) -> String {
    let stripped = port
        .strip_prefix("analog-output-")
        .or_else(|| port.strip_prefix("analog-input-"))
        .unwrap_or(port);

    stripped
        .split(|c: char| c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// First `N%` figure of `pactl get-sink-volume` output.
pub fn parse_volume_percent(output: &str) -> Option<u32> {
    output
        .split(|c| c == '/' || c == ',')
        .map(str::trim)
        .filter_map(|segment| segment.strip_suffix('%'))
        .find_map(|digits| digits.trim().parse().ok())
}

/// `yes` / `no`, as printed after `Mute:`.
pub fn parse_yes_no(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Mute flag from `pactl get-sink-mute` / `get-source-mute` output.
pub fn parse_mute(output: &str) -> Option<bool> {
    output
        .lines()
        .find_map(|line| line.trim().strip_prefix("Mute:"))
        .and_then(parse_yes_no)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SINKS: &str = "Sink #0
\tState: SUSPENDED
\tName: alsa_output.pci-0000_00_1f.3.hdmi-stereo
\tDescription: Built-in Audio Digital Stereo (HDMI)
\tMute: no
\tVolume: front-left: 65536 / 100% / 0.00 dB,   front-right: 65536 / 100% / 0.00 dB
\t        balance 0.00
\tProperties:
\t\tdevice.description = \"Built-in Audio\"
\tPorts:
\t\thdmi-output-0: HDMI / DisplayPort (type: HDMI, priority: 5900)
\tActive Port: hdmi-output-0

Sink #1
\tState: RUNNING
\tName: alsa_output.pci-0000_00_1f.3.analog-stereo
\tDescription: Built-in Audio Analog Stereo
\tMute: yes
\tVolume: front-left: 32768 /  50% / -18.06 dB,   front-right: 32768 /  50% / -18.06 dB
\tPorts:
\t\tanalog-output-speaker: Speakers (type: Speaker, priority: 10000)
\t\tanalog-output-headphones: Headphones (type: Headphones, priority: 9900, not available)
\tActive Port: analog-output-speaker
\tFormats:
\t\tpcm
";

    #[test]
    fn test_parse_blocks_splits_devices() {
        let blocks = parse_blocks(SINKS, "Sink");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].index, Some(0));
        assert_eq!(blocks[1].index, Some(1));
        assert_eq!(
            blocks[1].description(),
            Some("Built-in Audio Analog Stereo")
        );
        assert_eq!(blocks[0].muted(), Some(false));
        assert_eq!(blocks[1].muted(), Some(true));
    }

    #[test]
    fn test_nested_lines_skipped() {
        let blocks = parse_blocks(SINKS, "Sink");
        // port list entries look like `key: value` but are nested
        assert!(blocks[1].field("analog-output-speaker").is_none());
        assert!(blocks[0].field("device.description = \"Built-in Audio\"").is_none());
        assert_eq!(blocks[1].field("Ports"), Some(""));
    }

    #[test]
    fn test_active_port_pretty_printed() {
        let blocks = parse_blocks(SINKS, "Sink");
        let device = find_device(&blocks, "alsa_output.pci-0000_00_1f.3.analog-stereo").unwrap();
        assert_eq!(device.active_port(), Some("analog-output-speaker"));
        assert_eq!(pretty_port(device.active_port().unwrap()), "Speaker");
    }

    #[test]
    fn test_find_device_missing() {
        let blocks = parse_blocks(SINKS, "Sink");
        assert!(find_device(&blocks, "bluez_output.00_11").is_none());
        assert!(parse_blocks("garbage\nlines", "Sink").is_empty());
    }

    #[test]
    fn test_header_must_match_kind() {
        assert!(parse_blocks(SINKS, "Source").is_empty());
        let sources = "Source #3\n\tName: mic\n\tDescription: USB Mic\n";
        let blocks = parse_blocks(sources, "Source");
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name(), Some("mic"));
    }

    #[test]
    fn test_space_indented_output() {
        let output = "Sink #5\n    Name: a\n    Ports:\n        x: y\n    Active Port: x\n";
        let blocks = parse_blocks(output, "Sink");
        assert_eq!(blocks[0].active_port(), Some("x"));
        assert!(blocks[0].field("x").is_none());
    }

    #[test]
    fn test_pretty_port_variants() {
        assert_eq!(pretty_port("analog-output-headphones"), "Headphones");
        assert_eq!(pretty_port("analog-input-internal-mic"), "Internal Mic");
        assert_eq!(pretty_port("hdmi-output-0"), "Hdmi Output 0");
        assert_eq!(pretty_port("analog-output-lineout"), "Lineout");
    }

    #[test]
    fn test_parse_volume_percent() {
        let output = "Volume: front-left: 32768 /  50% / -18.06 dB,   front-right: 32768 /  50% / -18.06 dB\n        balance 0.00\n";
        assert_eq!(parse_volume_percent(output), Some(50));
        assert_eq!(
            parse_volume_percent("Volume: mono: 98304 / 150% / 10.57 dB"),
            Some(150)
        );
        assert_eq!(parse_volume_percent("no volume here"), None);
    }

    #[test]
    fn test_parse_mute() {
        assert_eq!(parse_mute("Mute: yes\n"), Some(true));
        assert_eq!(parse_mute("Mute: no"), Some(false));
        assert_eq!(parse_mute(""), None);
    }
}
