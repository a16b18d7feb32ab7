use std::fs::File;
use std::sync::mpsc::{self, Receiver, Sender};

use dropdown::layout::trigger_height;
use dropdown::render::{draw_sheet, draw_text, draw_trigger};
use dropdown::{
    Buffer, DefaultTheme, Dropdown, DropdownOption, DropdownProps, Error, Event, Key, Rect,
    RenderContext, Rgb, SelectValue, Selection, SymbolGlyphs, Terminal, TextStyle, Viewport,
};
use simplelog::{Config, LevelFilter, WriteLogger};

const MIN_WIDTH: u16 = 44;
const MIN_HEIGHT: u16 = 18;

const CITY: usize = 0;
const TAGS: usize = 1;
const PLAN: usize = 2;

/// Host screen with three dropdowns: a single pick the dropdown owns, a
/// multiple pick the dropdown owns, and a single pick the host owns.
struct Demo {
    fields: Vec<Dropdown>,
    focus: usize,
    /// Host-owned value behind the PLAN dropdown.
    plan: Selection,
    picks: Receiver<(usize, SelectValue)>,
    status: String,
    theme: DefaultTheme,
    glyphs: SymbolGlyphs,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

impl Demo {
    fn new() -> Self {
        let (tx, picks) = mpsc::channel();
        let plan = Selection::single("Standard");

        let fields = vec![
            Dropdown::new(
                DropdownProps::new()
                    .label("City")
                    .placeholder("Choose a city")
                    .header("Where do you live?")
                    .options([
                        DropdownOption::new("Istanbul").with_badge("34"),
                        DropdownOption::new("Ankara").with_badge("06"),
                        DropdownOption::new("Izmir").with_badge("35"),
                        DropdownOption::new("Bursa"),
                        DropdownOption::new("Antalya"),
                        DropdownOption::new("Konya"),
                        DropdownOption::new("Adana"),
                        DropdownOption::new("Trabzon"),
                    ])
                    .circle_selected(true)
                    .tick_selected(true)
                    .row_separators(true)
                    .on_select(reporter(tx.clone(), CITY)),
            ),
            Dropdown::new(
                DropdownProps::new()
                    .label("Interests")
                    .placeholder("Pick any")
                    .options(["Music", "Travel", "Cooking", "Sports", "Reading"])
                    .multiple(true)
                    .tick_selected(true)
                    .show_button(true)
                    .close_label("Done")
                    .on_select(reporter(tx.clone(), TAGS)),
            ),
            Dropdown::new(
                DropdownProps::new()
                    .label("Plan")
                    .placeholder("Select a plan")
                    .options([
                        ("Basic", "free"),
                        ("Standard", "$5"),
                        ("Premium", "$12"),
                    ])
                    .circle_selected(true)
                    .selected(plan.clone())
                    .on_select(reporter(tx, PLAN)),
            ),
        ];

        Self {
            fields,
            focus: 0,
            plan,
            picks,
            status: String::from("Tab moves focus, Enter opens, q quits"),
            theme: DefaultTheme::new(),
            glyphs: SymbolGlyphs,
        }
    }

    fn anchors(&self, viewport: Viewport) -> Vec<Rect> {
        let width = viewport.width.saturating_sub(4).min(40);
        let mut y = 2;
        self.fields
            .iter()
            .map(|field| {
                let height = trigger_height(field.props().label.is_some());
                let rect = Rect::new(2, y, width, height);
                y += height + 1;
                rect
            })
            .collect()
    }

    fn open_field(&self) -> Option<usize> {
        self.fields.iter().position(Dropdown::is_open)
    }

    fn handle(&mut self, event: &Event, viewport: Viewport) -> Flow {
        if let Event::Key { key, modifiers } = event {
            if modifiers.ctrl && *key == Key::Char('c') {
                return Flow::Quit;
            }
            if self.open_field().is_none() && *key == Key::Char('q') {
                return Flow::Quit;
            }
        }

        let anchors = self.anchors(viewport);

        if let Event::Resize { .. } = event {
            for (field, anchor) in self.fields.iter_mut().zip(&anchors) {
                field.handle_event(event, *anchor, viewport);
            }
            return Flow::Continue;
        }

        // An open sheet is modal
        if let Some(open) = self.open_field() {
            self.fields[open].handle_event(event, anchors[open], viewport);
            return Flow::Continue;
        }

        match event {
            Event::Key { key: Key::Tab, .. } => {
                self.focus = (self.focus + 1) % self.fields.len();
            }
            Event::Key {
                key: Key::BackTab, ..
            } => {
                self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
            }
            Event::Key { .. } => {
                let focus = self.focus;
                self.fields[focus].handle_event(event, anchors[focus], viewport);
            }
            _ => {
                for (i, (field, anchor)) in self.fields.iter_mut().zip(&anchors).enumerate() {
                    if field.handle_event(event, *anchor, viewport).is_consumed() {
                        self.focus = i;
                        break;
                    }
                }
            }
        }
        Flow::Continue
    }

    /// Apply picks reported by the callbacks. The PLAN value is host-owned,
    /// so it only changes here.
    fn drain_picks(&mut self) {
        while let Ok((field, value)) = self.picks.try_recv() {
            log::info!("field {} picked {:?}", field, value);
            self.status = match &value {
                SelectValue::Single(label) => format!("Picked {}", label),
                SelectValue::Multiple(set) if set.is_empty() => String::from("Cleared"),
                SelectValue::Multiple(set) => format!("Picked {}", set.join(", ")),
            };
            if field == PLAN {
                self.plan = value.into();
                self.fields[PLAN].set_selected(Some(self.plan.clone()));
            }
        }
    }

    fn paint(&self, buf: &mut Buffer, viewport: Viewport) {
        let cx = RenderContext::new(&self.theme, &self.glyphs);
        let text = Rgb::hex(0x111111);
        let muted = Rgb::hex(0x8E8E93);

        draw_text(
            buf,
            2,
            0,
            viewport.width.saturating_sub(4),
            "Profile",
            text,
            None,
            TextStyle::new().bold(),
        );

        for (i, (field, anchor)) in self.fields.iter().zip(self.anchors(viewport)).enumerate() {
            draw_trigger(field, anchor, i == self.focus, buf, &cx);
        }

        draw_text(
            buf,
            2,
            viewport.height.saturating_sub(1),
            viewport.width.saturating_sub(4),
            &self.status,
            muted,
            None,
            TextStyle::new(),
        );

        if let Some(open) = self.open_field() {
            draw_sheet(&self.fields[open], viewport, buf, &cx);
        }
    }
}

fn reporter(tx: Sender<(usize, SelectValue)>, field: usize) -> impl Fn(&SelectValue) + Send + Sync {
    move |value| {
        // The receiver lives as long as the demo loop
        let _ = tx.send((field, value.clone()));
    }
}

fn run() -> dropdown::Result<()> {
    let mut terminal = Terminal::new()?;
    let viewport = terminal.viewport();
    if viewport.width < MIN_WIDTH || viewport.height < MIN_HEIGHT {
        return Err(Error::TooSmall {
            width: viewport.width,
            height: viewport.height,
        });
    }

    let mut demo = Demo::new();
    let mut viewport = viewport;

    loop {
        terminal.draw(|buf| demo.paint(buf, viewport))?;

        for event in terminal.poll(None)? {
            if let Event::Resize { width, height } = event {
                viewport = Viewport::new(width, height);
            }
            if demo.handle(&event, viewport) == Flow::Quit {
                log::info!("demo exiting");
                return Ok(());
            }
        }
        demo.drain_picks();
    }
}

fn main() {
    match File::create("dropdown-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
