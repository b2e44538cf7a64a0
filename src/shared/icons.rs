use serde::{Deserialize, Serialize};

/// Line icons used across the dashboard (24x24 viewbox, stroked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Sun,
    CloudSun,
    Zap,
    BatteryCharging,
    BatteryFull,
    PlugZap,
    PiggyBank,
    HandCoins,
    PanelTop,
    Leaf,
    Calendar,
    Clock,
    Moon,
    Droplets,
    Thermometer,
    Close,
}

impl IconKind {
    /// Path data for the icon, drawn in order.
    pub fn paths(self) -> &'static [&'static str] {
        match self {
            IconKind::Sun => &[
                "M16 12a4 4 0 1 1-8 0a4 4 0 1 1 8 0",
                "M12 2v2",
                "M12 20v2",
                "m4.93 4.93 1.41 1.41",
                "m17.66 17.66 1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "m6.34 17.66-1.41 1.41",
                "m19.07 4.93-1.41 1.41",
            ],
            IconKind::CloudSun => &[
                "M12 2v2",
                "m4.93 4.93 1.41 1.41",
                "M20 12h2",
                "m19.07 4.93-1.41 1.41",
                "M15.947 12.65a4 4 0 0 0-5.925-4.128",
                "M13 22H7a5 5 0 1 1 4.9-6H13a3 3 0 0 1 0 6Z",
            ],
            IconKind::Zap => &[
                "M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z",
            ],
            IconKind::BatteryCharging => &[
                "M15 7h1a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2h-2",
                "M6 7H4a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2h1",
                "m11 7-3 5h4l-3 5",
                "M22 11v2",
            ],
            IconKind::BatteryFull => &[
                "M4 7h12a2 2 0 0 1 2 2v6a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V9a2 2 0 0 1 2-2Z",
                "M22 11v2",
                "M6 11v2",
                "M10 11v2",
                "M14 11v2",
            ],
            IconKind::PlugZap => &[
                "M6.3 20.3a2.4 2.4 0 0 0 3.4 0L12 18l-6-6-2.3 2.3a2.4 2.4 0 0 0 0 3.4Z",
                "m2 22 3-3",
                "M7.5 13.5 10 11",
                "M10.5 16.5 13 14",
                "m18 3-4 4h6l-4 4",
            ],
            IconKind::PiggyBank => &[
                "M19 5c-1.5 0-2.8 1.4-3 2-3.5-1.5-11-.3-11 5 0 1.8 0 3 2 4.5V20h4v-2h3v2h4v-4c1-.5 1.7-1 2-2h2v-4h-2c0-1-.5-1.5-1-2V5z",
                "M2 9v1c0 1.1.9 2 2 2h1",
                "M16 11h.01",
            ],
            IconKind::HandCoins => &[
                "M11 15h2a2 2 0 1 0 0-4h-3c-.6 0-1.1.2-1.4.6L3 17",
                "m7 21 1.6-1.4c.3-.4.8-.6 1.4-.6h4c1.1 0 2.1-.4 2.8-1.2l4.6-4.4a2 2 0 0 0-2.75-2.91l-4.2 3.9",
                "m2 16 6 6",
                "M19 8a3 3 0 1 1-6 0a3 3 0 1 1 6 0",
                "M8 4a2 2 0 1 1-4 0a2 2 0 1 1 4 0",
            ],
            IconKind::PanelTop => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2Z",
                "M3 9h18",
            ],
            IconKind::Leaf => &[
                "M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z",
                "M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12",
            ],
            IconKind::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2Z",
                "M3 10h18",
            ],
            IconKind::Clock => &["M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0", "M12 6v6l4 2"],
            IconKind::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
            IconKind::Droplets => &[
                "M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z",
                "M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97",
            ],
            IconKind::Thermometer => &["M14 4v10.54a4 4 0 1 1-4 0V4a2 2 0 0 1 4 0Z"],
            IconKind::Close => &["M18 6 6 18", "m6 6 12 12"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_kebab_case() {
        let s = serde_json::to_string(&IconKind::BatteryCharging).unwrap();
        assert_eq!(s, "\"battery-charging\"");
        let back: IconKind = serde_json::from_str("\"plug-zap\"").unwrap();
        assert_eq!(back, IconKind::PlugZap);
    }

    #[test]
    fn every_icon_has_paths() {
        for icon in [
            IconKind::Sun,
            IconKind::CloudSun,
            IconKind::Zap,
            IconKind::BatteryCharging,
            IconKind::BatteryFull,
            IconKind::PlugZap,
            IconKind::PiggyBank,
            IconKind::HandCoins,
            IconKind::PanelTop,
            IconKind::Leaf,
            IconKind::Calendar,
            IconKind::Clock,
            IconKind::Moon,
            IconKind::Droplets,
            IconKind::Thermometer,
            IconKind::Close,
        ] {
            assert!(!icon.paths().is_empty());
            assert!(icon.paths().iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }
}
