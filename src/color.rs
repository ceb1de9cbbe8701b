//! The red/green/blue component triple the pipeline works on after splitting.

/// Three hex-digit strings that always move in lock-step.
///
/// After [`Components::split`] all three share one length; every operation
/// here applies the same edit to each channel so that stays true.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Components {
    pub red: String,
    pub green: String,
    pub blue: String,
}

impl Components {
    /// Create a triple from three channel strings.
    pub fn new(red: impl Into<String>, green: impl Into<String>, blue: impl Into<String>) -> Self {
        Self {
            red: red.into(),
            green: green.into(),
            blue: blue.into(),
        }
    }

    /// Slice `value` into three contiguous parts of `floor(len / 3)` characters.
    ///
    /// Characters past `3 * part_len` are dropped; callers pad to a multiple of
    /// three first so nothing is lost in practice.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use legacy_color_core::Components;
    ///
    /// let parts = Components::split("c00c00000000");
    /// assert_eq!(parts, Components::new("c00c", "0000", "0000"));
    /// ```
    pub fn split(value: &str) -> Self {
        let chars: Vec<char> = value.chars().collect();
        let part_len = chars.len() / 3;
        let take = |start: usize| chars[start..start + part_len].iter().collect::<String>();
        Self {
            red: take(0),
            green: take(part_len),
            blue: take(part_len * 2),
        }
    }

    /// The common character length of the three channels.
    #[inline]
    pub fn shared_len(&self) -> usize {
        self.red.chars().count()
    }

    /// Apply the same edit to every channel.
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&str) -> String,
    {
        Self {
            red: f(&self.red),
            green: f(&self.green),
            blue: f(&self.blue),
        }
    }

    /// Check whether all three channels start with `ch`.
    pub fn all_start_with(&self, ch: char) -> bool {
        self.channels().iter().all(|c| c.starts_with(ch))
    }

    /// Channels in red, green, blue order.
    pub fn channels(&self) -> [&str; 3] {
        [&self.red, &self.green, &self.blue]
    }

    /// Join the channels with `sep`, e.g. `"ff,00,00"`.
    pub fn joined(&self, sep: &str) -> String {
        self.channels().join(sep)
    }

    /// Concatenate the channels into one color string.
    pub fn concat(&self) -> String {
        self.joined("")
    }

    /// Render one labelled line per channel.
    pub fn describe(&self) -> String {
        format!(
            "Red: \"{}\"\nGreen: \"{}\"\nBlue: \"{}\"",
            self.red, self.green, self.blue
        )
    }

    /// Render one `before → after` line per channel.
    pub fn describe_change(before: &Self, after: &Self) -> String {
        format!(
            "Red: \"{}\" → \"{}\"\nGreen: \"{}\" → \"{}\"\nBlue: \"{}\" → \"{}\"",
            before.red, after.red, before.green, after.green, before.blue, after.blue
        )
    }
}

/// Keep the last `n` characters of `s`.
pub(crate) fn keep_last(s: &str, n: usize) -> String {
    let len = s.chars().count();
    s.chars().skip(len.saturating_sub(n)).collect()
}

/// Keep the first `n` characters of `s`.
pub(crate) fn keep_first(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

/// Drop the first character of `s`.
pub(crate) fn drop_first(s: &str) -> String {
    s.chars().skip(1).collect()
}
