use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::radar;
use crate::gui::session::Session;
use crate::gui::theme::ThemeColors;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;
use sweep::{Bounds, RingStyle, ring_paints};

pub struct AppModel {
    pub session: Rc<RefCell<Session>>,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Start,
    Stop,
    SignedIn(Option<PathBuf>),
    SignedOut,
    MinRadius(f64),
    Resize(i32, i32),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Start => AppMsg::Start,
            AppEvent::Stop => AppMsg::Stop,
            AppEvent::SignedIn(avatar) => AppMsg::SignedIn(avatar),
            AppEvent::SignedOut => AppMsg::SignedOut,
            AppEvent::MinRadius(px) => AppMsg::MinRadius(px),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Radar"),
            set_default_size: (480, 480),

            #[name = "drawing_area"]
            gtk::DrawingArea {
                set_hexpand: true,
                set_vexpand: true,

                connect_resize[sender] => move |_, width, height| {
                    sender.input(AppMsg::Resize(width, height));
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, rx) = init;

        let model = AppModel {
            session: Rc::new(RefCell::new(Session::new(config))),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let session_draw = model.session.clone();
        widgets
            .drawing_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let session = session_draw.borrow();
                let colors = ThemeColors::from_context(
                    &drawing_area.style_context(),
                    &session.config.appearance,
                );
                let bounds = Bounds::from_size(width as f64, height as f64);
                let style = RingStyle {
                    accent: colors.accent,
                    stroke_width: session.animator.settings().stroke_width,
                };
                let paints = ring_paints(&session.animator, bounds, &style);

                if let Err(e) = radar::draw(cr, &paints)
                    .and_then(|_| session.avatar.draw(cr, bounds.center(), &colors))
                {
                    log::error!("Drawing error: {}", e);
                }
            });

        let session_tick = model.session.clone();
        widgets
            .drawing_area
            .add_tick_callback(move |drawing_area, clock| {
                let frame_time = Duration::from_micros(clock.frame_time().max(0) as u64);
                if session_tick.borrow_mut().animator.tick(frame_time) {
                    drawing_area.queue_draw();
                }
                glib::ControlFlow::Continue
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        let mut session = self.session.borrow_mut();
        match msg {
            AppMsg::Start => session.start(),
            AppMsg::Stop => session.stop(),
            AppMsg::SignedIn(path) => session.sign_in(path),
            AppMsg::SignedOut => session.sign_out(),
            AppMsg::MinRadius(px) => session.animator.set_min_radius(px),
            AppMsg::Resize(width, height) => session
                .animator
                .on_bounds_changed(width as f64, height as f64),
            AppMsg::ConfigReload => match config::load_config() {
                Ok(new_config) => {
                    session.apply_config(new_config);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
        drop(session);
        self.drawing_area.queue_draw();
    }
}
