use super::KEY_WIDTH;
use msgcal_providers::{ChannelKind, ChannelRef, ExportIndex};
use msgcal_types::AggregateStatistics;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt;

fn write_key(f: &mut fmt::Formatter, indent: &str, key: &str, color: bool) -> fmt::Result {
    let padded = format!("{:<width$}", key, width = KEY_WIDTH);
    if color {
        write!(f, "{}{}", indent, padded.cyan())
    } else {
        write!(f, "{}{}", indent, padded)
    }
}

fn write_row(
    f: &mut fmt::Formatter,
    indent: &str,
    key: &str,
    value: impl fmt::Display,
    color: bool,
) -> fmt::Result {
    write_key(f, indent, key, color)?;
    writeln!(f, " {}", value)
}

// --------------------------------------------------------
// Index
// --------------------------------------------------------

pub struct IndexSummaryView<'a> {
    index: &'a ExportIndex,
    color: bool,
}

impl<'a> IndexSummaryView<'a> {
    pub fn new(index: &'a ExportIndex, color: bool) -> Self {
        Self { index, color }
    }
}

impl<'a> fmt::Display for IndexSummaryView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Loaded the index")?;
        write_row(f, "    ", "Servers", self.index.servers.len(), self.color)?;
        write_row(f, "    ", "Channels", self.index.channel_count(), self.color)?;
        write_row(
            f,
            "    ",
            "Direct Messages",
            self.index.direct_messages.len(),
            self.color,
        )
    }
}

// --------------------------------------------------------
// Server and DM listing
// --------------------------------------------------------

pub struct ServerListView<'a> {
    index: &'a ExportIndex,
    color: bool,
}

impl<'a> ServerListView<'a> {
    pub fn new(index: &'a ExportIndex, color: bool) -> Self {
        Self { index, color }
    }
}

impl<'a> fmt::Display for ServerListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Servers")?;
        if self.index.servers.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for (server, channels) in &self.index.servers {
            write_row(f, "    ", server, format!("{} channels", channels.len()), self.color)?;
        }

        writeln!(f)?;
        writeln!(f, "Direct Messages")?;
        if self.index.direct_messages.is_empty() {
            writeln!(f, "    (none)")?;
        }
        for dm in &self.index.direct_messages {
            if dm.is_group() {
                writeln!(f, "    {} (group)", dm.label())?;
            } else {
                writeln!(f, "    {}", dm.label())?;
            }
        }

        Ok(())
    }
}

/// Channels of one kind inside a server.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelKindGroup {
    pub kind: ChannelKind,
    pub channels: Vec<ChannelRef>,
}

pub struct ServerChannelsView<'a> {
    server: &'a str,
    groups: &'a [ChannelKindGroup],
    color: bool,
}

impl<'a> ServerChannelsView<'a> {
    pub fn new(server: &'a str, groups: &'a [ChannelKindGroup], color: bool) -> Self {
        Self {
            server,
            groups,
            color,
        }
    }
}

impl<'a> fmt::Display for ServerChannelsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let total: usize = self.groups.iter().map(|g| g.channels.len()).sum();

        writeln!(f, "Loaded the server {}", self.server)?;
        write_row(f, "    ", "Channels (Total)", total, self.color)?;

        for group in self.groups {
            write_row(
                f,
                "        ",
                group.kind.heading(),
                group.channels.len(),
                self.color,
            )?;
        }

        for group in self.groups {
            writeln!(f)?;
            writeln!(f, "{}", group.kind.heading())?;
            for channel in &group.channels {
                writeln!(f, "    {}", channel.name)?;
            }
        }

        Ok(())
    }
}

// --------------------------------------------------------
// Statistics
// --------------------------------------------------------

pub struct StatsView<'a> {
    stats: &'a AggregateStatistics,
    channels: usize,
    color: bool,
}

impl<'a> StatsView<'a> {
    pub fn new(stats: &'a AggregateStatistics, channels: usize, color: bool) -> Self {
        Self {
            stats,
            channels,
            color,
        }
    }
}

impl<'a> fmt::Display for StatsView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let day = |d: Option<chrono::NaiveDate>| {
            d.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string())
        };

        writeln!(f, "Statistics")?;
        write_row(f, "    ", "Channels", self.channels, self.color)?;
        write_row(f, "    ", "Messages", self.stats.total_count, self.color)?;
        write_row(f, "    ", "Active days", self.stats.active_days, self.color)?;
        write_row(f, "    ", "Max per day", self.stats.max_count, self.color)?;
        write_row(
            f,
            "    ",
            "Mean per day",
            format!("{:.2}", self.stats.mean_count),
            self.color,
        )?;
        write_row(
            f,
            "    ",
            "Median per day",
            format!("{:.2}", self.stats.median_count),
            self.color,
        )?;
        write_row(f, "    ", "First day", day(self.stats.first_day), self.color)?;
        write_row(f, "    ", "Last day", day(self.stats.last_day), self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_index_summary() {
        let index = ExportIndex::from_entries([
            ("1", "general in Crab Club"),
            ("2", "random in Crab Club"),
            ("3", "Direct Message with amy#0001"),
        ]);

        let out = IndexSummaryView::new(&index, false).to_string();
        assert_eq!(
            out,
            "Loaded the index\n    Servers              1\n    Channels             2\n    Direct Messages      1\n"
        );
    }

    #[test]
    fn test_server_list_marks_groups() {
        let index = ExportIndex::from_entries([
            ("1", "general in Crab Club"),
            ("3", "Direct Message with amy#0001"),
            ("4", "book club"),
        ]);

        let out = ServerListView::new(&index, false).to_string();
        assert!(out.contains("    Crab Club            1 channels\n"));
        assert!(out.contains("    amy\n"));
        assert!(out.contains("    book club (group)\n"));
    }

    #[test]
    fn test_stats_panel() {
        let stats = AggregateStatistics {
            max_count: 2,
            mean_count: 1.5,
            median_count: 1.5,
            first_day: NaiveDate::from_ymd_opt(2023, 1, 1),
            last_day: NaiveDate::from_ymd_opt(2023, 1, 2),
            active_days: 2,
            total_count: 3,
            ..Default::default()
        };

        let out = StatsView::new(&stats, 1, false).to_string();
        assert!(out.contains("    Messages             3\n"));
        assert!(out.contains("    Mean per day         1.50\n"));
        assert!(out.contains("    First day            2023-01-01\n"));
    }

    #[test]
    fn test_colored_keys() {
        let stats = AggregateStatistics::default();
        let out = StatsView::new(&stats, 0, true).to_string();
        assert!(out.contains("\x1b[36mChannels"));
        assert!(out.contains("\x1b[36mLast day"));
    }
}
