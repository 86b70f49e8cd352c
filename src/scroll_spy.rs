use thiserror::Error;

/// Header compensation used by the navigation when no offset is given.
pub const DEFAULT_OFFSET: u32 = 100;

/// `scroll-margin-top` of every anchored section. Jumping to an anchor
/// leaves the section this far below the viewport top, so it has to stay
/// within the offset for the jumped-to section to come out active.
pub const SECTION_SCROLL_MARGIN: u32 = DEFAULT_OFFSET - 4;

const _: () = assert!(SECTION_SCROLL_MARGIN <= DEFAULT_OFFSET + 1);

/// Where sections sit on the page and how far the viewport has scrolled.
///
/// The browser implementation reads `offsetTop` and `window.scrollY`; tests
/// use an in-memory page.
pub trait PageLayout {
    /// Top offset in page pixels of the element named `id`, `None` if the
    /// page has no such element.
    fn section_top(&self, id: &str) -> Option<f64>;

    fn scroll_y(&self) -> f64;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SpyError {
    #[error("no element with id `{0}`")]
    MissingSection(String),
    #[error("section id `{0}` given more than once")]
    DuplicateSection(String),
}

/// Coalesces any number of scroll events into a single recomputation per
/// animation frame.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Marks a recomputation as pending. Returns `true` only when the caller
    /// has to request a new animation frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consumes the pending flag when the frame fires.
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Section {
    id: String,
    top: f64,
}

/// Position-threshold scroll spy.
///
/// The active section is the last one, in the order given, whose top lies at
/// or above `scroll_y + offset + 1`. Section tops are cached when the spy is
/// attached and refreshed on resize.
#[derive(Debug)]
pub struct ScrollSpy {
    ids: Vec<String>,
    offset: u32,
    sections: Vec<Section>,
    active: String,
    frame: FrameGate,
    stopped: bool,
}

impl ScrollSpy {
    pub fn new<I, S>(ids: I, offset: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
            offset,
            sections: Vec::new(),
            active: String::new(),
            frame: FrameGate::default(),
            stopped: false,
        }
    }

    /// The currently active section id, empty when none qualifies.
    pub fn active(&self) -> &str {
        &self.active
    }

    /// Whether the spy has anything to watch. Observation is skipped entirely
    /// when no id resolved to an element.
    pub fn is_observing(&self) -> bool {
        !self.stopped && !self.sections.is_empty()
    }

    /// Resolves every id against the page, caches the section tops and runs
    /// the first determination.
    ///
    /// Ids that do not resolve, or that repeat an earlier id, are skipped and
    /// reported back so the caller can log them.
    pub fn attach(&mut self, layout: &impl PageLayout) -> Vec<SpyError> {
        let mut skipped = Vec::new();
        self.sections.clear();
        for id in &self.ids {
            if self.sections.iter().any(|s| &s.id == id) {
                skipped.push(SpyError::DuplicateSection(id.clone()));
                continue;
            }
            match layout.section_top(id) {
                Some(top) => self.sections.push(Section {
                    id: id.clone(),
                    top,
                }),
                None => skipped.push(SpyError::MissingSection(id.clone())),
            }
        }
        self.recompute(layout);
        skipped
    }

    /// Records a scroll event. Returns `true` when the caller must schedule
    /// an animation frame; further events before that frame fires are folded
    /// into it.
    pub fn schedule_scroll(&mut self) -> bool {
        if !self.is_observing() {
            return false;
        }
        self.frame.request()
    }

    /// Runs the coalesced recomputation for an animation frame.
    ///
    /// Returns the new active id when it changed.
    pub fn on_frame(&mut self, layout: &impl PageLayout) -> Option<&str> {
        if !self.frame.take() || self.stopped {
            return None;
        }
        self.recompute(layout)
    }

    /// Refreshes the cached section tops and recomputes right away. A pending
    /// frame is left in place; it will find nothing new to report.
    pub fn on_resize(&mut self, layout: &impl PageLayout) -> Option<&str> {
        if !self.is_observing() {
            return None;
        }
        for section in &mut self.sections {
            // an element removed since attach keeps its last known top
            if let Some(top) = layout.section_top(&section.id) {
                section.top = top;
            }
        }
        self.recompute(layout)
    }

    /// Stops observation for good. Pending frames are dropped and every later
    /// event is ignored.
    pub fn teardown(&mut self) {
        self.stopped = true;
        self.frame.take();
        self.sections.clear();
    }

    /// The scroll line compared against section tops.
    fn threshold(&self, scroll_y: f64) -> f64 {
        scroll_y + f64::from(self.offset) + 1.0
    }

    fn determine(&self, scroll_y: f64) -> &str {
        let line = self.threshold(scroll_y);
        self.sections
            .iter()
            .filter(|s| s.top <= line)
            .last()
            .map(|s| s.id.as_str())
            .unwrap_or("")
    }

    fn recompute(&mut self, layout: &impl PageLayout) -> Option<&str> {
        if self.stopped {
            return None;
        }
        let next = self.determine(layout.scroll_y());
        if next == self.active {
            return None;
        }
        self.active = next.to_string();
        Some(&self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::HashMap;

    struct FakePage {
        tops: HashMap<String, f64>,
        scroll: Cell<f64>,
        reads: Cell<usize>,
    }

    impl FakePage {
        fn new(tops: &[(&str, f64)]) -> Self {
            Self {
                tops: tops.iter().map(|(id, t)| (id.to_string(), *t)).collect(),
                scroll: Cell::new(0.0),
                reads: Cell::new(0),
            }
        }

        fn scroll_to(&self, y: f64) {
            self.scroll.set(y);
        }
    }

    impl PageLayout for FakePage {
        fn section_top(&self, id: &str) -> Option<f64> {
            self.tops.get(id).copied()
        }

        fn scroll_y(&self) -> f64 {
            self.reads.set(self.reads.get() + 1);
            self.scroll.get()
        }
    }

    const IDS: [&str; 4] = ["projects", "experience", "education", "contact"];

    fn portfolio_page() -> FakePage {
        FakePage::new(&[
            ("projects", 800.0),
            ("experience", 1600.0),
            ("education", 2400.0),
            ("contact", 3000.0),
        ])
    }

    fn scroll(spy: &mut ScrollSpy, page: &FakePage, y: f64) -> String {
        page.scroll_to(y);
        if spy.schedule_scroll() {
            spy.on_frame(page);
        }
        spy.active().to_string()
    }

    #[test]
    fn test_worked_example() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, DEFAULT_OFFSET);
        assert!(spy.attach(&page).is_empty());

        assert_eq!(scroll(&mut spy, &page, 750.0), "projects");
        assert_eq!(scroll(&mut spy, &page, 1600.0), "experience");
    }

    #[test]
    fn test_empty_before_first_threshold() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);
        assert_eq!(spy.active(), "");

        // 698 + 100 + 1 = 799 < 800
        assert_eq!(scroll(&mut spy, &page, 698.0), "");
        // 699 + 100 + 1 = 800, exactly on the boundary
        assert_eq!(scroll(&mut spy, &page, 699.0), "projects");
    }

    #[test]
    fn test_first_section_between_thresholds() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);

        for y in [699.0, 900.0, 1200.0, 1498.0] {
            assert_eq!(scroll(&mut spy, &page, y), "projects", "scroll_y = {y}");
        }
        assert_eq!(scroll(&mut spy, &page, 1499.0), "experience");
    }

    #[test]
    fn test_monotonic_scroll_follows_id_order() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);

        let mut transitions: Vec<String> = Vec::new();
        let mut y = 0.0;
        while y <= 4000.0 {
            let active = scroll(&mut spy, &page, y);
            if !active.is_empty() && transitions.last() != Some(&active) {
                transitions.push(active);
            }
            y += 37.0;
        }
        assert_eq!(transitions, IDS);
    }

    #[test]
    fn test_attach_computes_initial_active() {
        let page = portfolio_page();
        page.scroll_to(2500.0);
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);
        assert_eq!(spy.active(), "education");
    }

    #[test]
    fn test_missing_ids_are_skipped() {
        let page = FakePage::new(&[("projects", 800.0), ("contact", 3000.0)]);
        let mut spy = ScrollSpy::new(IDS, 100);
        let skipped = spy.attach(&page);
        assert_eq!(
            skipped,
            vec![
                SpyError::MissingSection("experience".to_string()),
                SpyError::MissingSection("education".to_string()),
            ]
        );

        assert_eq!(scroll(&mut spy, &page, 1600.0), "projects");
        assert_eq!(scroll(&mut spy, &page, 2900.0), "contact");
    }

    #[test]
    fn test_duplicate_ids_kept_once() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(["projects", "experience", "projects"], 100);
        let skipped = spy.attach(&page);
        assert_eq!(
            skipped,
            vec![SpyError::DuplicateSection("projects".to_string())]
        );
        assert_eq!(scroll(&mut spy, &page, 5000.0), "experience");
    }

    #[test]
    fn test_empty_ids_never_observe() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(Vec::<String>::new(), 100);
        assert!(spy.attach(&page).is_empty());
        assert!(!spy.is_observing());
        assert!(!spy.schedule_scroll());
        assert_eq!(scroll(&mut spy, &page, 2000.0), "");
        assert_eq!(spy.on_resize(&page), None);
    }

    #[test]
    fn test_no_resolved_ids_never_observe() {
        let page = FakePage::new(&[]);
        let mut spy = ScrollSpy::new(IDS, 100);
        assert_eq!(spy.attach(&page).len(), 4);
        assert!(!spy.is_observing());
        assert_eq!(scroll(&mut spy, &page, 2000.0), "");
    }

    #[test]
    fn test_scroll_events_coalesce_per_frame() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);
        let reads_after_attach = page.reads.get();

        assert!(spy.schedule_scroll());
        for _ in 0..10 {
            assert!(!spy.schedule_scroll());
        }
        page.scroll_to(1700.0);
        assert_eq!(spy.on_frame(&page), Some("experience"));
        assert_eq!(page.reads.get(), reads_after_attach + 1);

        // nothing pending, the next frame does no work
        assert_eq!(spy.on_frame(&page), None);
        assert_eq!(page.reads.get(), reads_after_attach + 1);

        // and the gate opens again
        assert!(spy.schedule_scroll());
    }

    #[test]
    fn test_on_frame_reports_only_changes() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);

        page.scroll_to(900.0);
        spy.schedule_scroll();
        assert_eq!(spy.on_frame(&page), Some("projects"));

        page.scroll_to(950.0);
        spy.schedule_scroll();
        assert_eq!(spy.on_frame(&page), None);
        assert_eq!(spy.active(), "projects");
    }

    #[test]
    fn test_resize_refreshes_cached_tops() {
        let mut page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);
        assert_eq!(scroll(&mut spy, &page, 1550.0), "experience");

        // narrower viewport: projects grows, experience moves down
        page.tops.insert("experience".to_string(), 2000.0);
        // stale cache still in use until the resize event arrives
        assert_eq!(scroll(&mut spy, &page, 1560.0), "experience");

        assert_eq!(spy.on_resize(&page), Some("projects"));
        assert_eq!(scroll(&mut spy, &page, 1800.0), "projects");
        assert_eq!(scroll(&mut spy, &page, 1900.0), "experience");
    }

    #[test]
    fn test_teardown_stops_updates() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 100);
        spy.attach(&page);
        assert_eq!(scroll(&mut spy, &page, 900.0), "projects");

        // a frame was requested just before unmount
        page.scroll_to(2000.0);
        assert!(spy.schedule_scroll());
        spy.teardown();

        assert_eq!(spy.on_frame(&page), None);
        assert!(!spy.schedule_scroll());
        assert_eq!(spy.on_resize(&page), None);
        assert_eq!(scroll(&mut spy, &page, 3500.0), "projects");
        assert!(spy.stopped);
    }

    #[test]
    fn test_anchor_jump_activates_target_section() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, DEFAULT_OFFSET);
        spy.attach(&page);

        // a nav click scrolls the target to `SECTION_SCROLL_MARGIN` below the top
        for (id, top) in [
            ("projects", 800.0),
            ("experience", 1600.0),
            ("education", 2400.0),
            ("contact", 3000.0),
        ] {
            let y = top - f64::from(SECTION_SCROLL_MARGIN);
            assert_eq!(scroll(&mut spy, &page, y), id, "jump to #{id}");
        }

        // and jumping back up lands on the earlier section again
        let y = 1600.0 - f64::from(SECTION_SCROLL_MARGIN);
        assert_eq!(scroll(&mut spy, &page, y), "experience");
    }

    #[test]
    fn test_zero_offset() {
        let page = portfolio_page();
        let mut spy = ScrollSpy::new(IDS, 0);
        spy.attach(&page);
        assert_eq!(scroll(&mut spy, &page, 798.0), "");
        assert_eq!(scroll(&mut spy, &page, 799.0), "projects");
    }

    #[test]
    fn test_active_is_always_a_given_id() {
        let page = FakePage::new(&[
            ("projects", 800.0),
            ("experience", 1600.0),
            ("stray", 100.0),
        ]);
        let mut spy = ScrollSpy::new(["projects", "experience"], 100);
        spy.attach(&page);
        for y in (0..3000).step_by(50) {
            let active = scroll(&mut spy, &page, f64::from(y));
            assert!(active.is_empty() || spy.ids.contains(&active));
        }
    }

    #[test]
    fn test_frame_gate() {
        let mut gate = FrameGate::default();
        assert!(!gate.pending);
        assert!(gate.request());
        assert!(!gate.request());
        assert!(gate.pending);
        assert!(gate.take());
        assert!(!gate.take());
        assert!(gate.request());
    }
}
