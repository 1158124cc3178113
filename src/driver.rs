//! Line-based panel driver
//!
//! Stands in for the on-screen panel: each input line is either a setting
//! change (`<key> [value]`) or a driver command. Map requests queued by the
//! viewer are handed off after every line.

use odrviewer_core::{shared, Error, Result, Shared};
use odrviewer_scene::{Camera, FilePicker, RoadScene, SceneObjectId, SceneViewer};
use odrviewer_settings::{PanelConfig, SettingsSynchronizer};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

const HELP: &str = "\
commands:
  <key> [value]   change a setting, e.g. `roadmarks false`, `resolution High`, `fitView`
  list            show every setting and its current value
  state           show scene visibility and camera
  preset <name>   apply a camera preset from the config
  save            store current values as startup defaults
  help            show this text
  quit            exit";

/// Whether the driver keeps reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct PanelDriver {
    sync: SettingsSynchronizer,
    viewer: Shared<SceneViewer>,
    config: PanelConfig,
    config_path: Option<PathBuf>,
}

impl PanelDriver {
    pub fn new(config: PanelConfig, picker: Box<dyn FilePicker>) -> Self {
        let scene = shared(RoadScene::new());
        let mut camera = Camera::default();
        camera.set_fov(config.defaults.fov as f32);

        let viewer = shared(SceneViewer::with_picker(
            scene.clone(),
            shared(camera),
            picker,
        ));
        let mut sync = SettingsSynchronizer::new(config.defaults.clone(), scene, viewer.clone());
        sync.resync_scene();

        Self {
            sync,
            viewer,
            config,
            config_path: None,
        }
    }

    /// File `save` writes to
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn synchronizer(&self) -> &SettingsSynchronizer {
        &self.sync
    }

    pub fn viewer(&self) -> &Shared<SceneViewer> {
        &self.viewer
    }

    /// Queue a map given on the command line
    pub fn open_map(&mut self, path: PathBuf) {
        self.viewer.borrow_mut().open_map(path);
        self.process_map_requests();
    }

    /// Process input until `quit` or end of input.
    ///
    /// Rejected commands are reported on `out` and processing continues;
    /// only failures reading `input` or writing `out` abort.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            match self.execute(&line?, out) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => writeln!(out, "error: {}", e)?,
            }
        }
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "quit" | "exit" => return Ok(Flow::Quit),
            "help" => writeln!(out, "{}", HELP)?,
            "list" => self.write_settings(out)?,
            "state" => self.write_state(out)?,
            "preset" => {
                let preset = self
                    .config
                    .preset(rest)
                    .cloned()
                    .ok_or_else(|| Error::other(format!("Unknown camera preset: {}", rest)))?;
                self.sync.apply_camera_preset(&preset);
            }
            "save" => self.save()?,
            key => {
                debug!("Panel input: {} {}", key, rest);
                self.sync.update_setting(key, rest)?;
            }
        }

        self.process_map_requests();
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<()> {
        let path = self
            .config_path
            .clone()
            .ok_or_else(|| Error::other("No config path to save to"))?;
        self.config.defaults = self.sync.params().clone();
        self.config
            .save_to_file(&path)
            .map_err(|e| Error::other(format!("Cannot save {}: {}", path.display(), e)))?;
        info!("Saved panel defaults to {}", path.display());
        Ok(())
    }

    /// Hand queued map work to the loader. Loading replaces the scene
    /// geometry, so stored flags are re-applied afterwards.
    fn process_map_requests(&mut self) {
        let requests = self.viewer.borrow_mut().drain_requests();
        if requests.is_empty() {
            return;
        }

        let options = self.sync.map_load_options();
        for request in &requests {
            info!(
                resolution = options.resolution,
                lateral_profile = options.with_lateral_profile,
                lane_height = options.with_lane_height,
                "Map request: {:?}",
                request
            );
        }
        self.sync.resync_scene();
    }

    fn write_settings<W: Write>(&self, out: &mut W) -> Result<()> {
        for descriptor in self.sync.descriptors() {
            let folder = descriptor.folder.to_string();
            let value = self.sync.value(descriptor.key);
            let mut line = if folder.is_empty() {
                format!("{} = {}", descriptor.key, value)
            } else {
                format!("{}/{} = {}", folder, descriptor.key, value)
            };
            if !descriptor.options.is_empty() {
                line.push_str(&format!(" [{}]", descriptor.options.join("|")));
            }
            writeln!(out, "{:<48} {}", line, descriptor.label)?;
        }
        Ok(())
    }

    fn write_state<W: Write>(&self, out: &mut W) -> Result<()> {
        let viewer = self.viewer.borrow();
        {
            let scene = viewer.scene().borrow();
            for id in SceneObjectId::ALL {
                writeln!(out, "{} visible={}", id, scene.is_visible(id))?;
            }
            let material = &scene.road_network_material;
            writeln!(
                out,
                "road_network_material wireframe={} transparent={}",
                material.wireframe, material.transparent
            )?;
        }

        let camera = viewer.camera().borrow();
        writeln!(
            out,
            "camera pos={:?} target={:?} fov={}",
            camera.position.to_array(),
            camera.target.to_array(),
            camera.fov
        )?;
        if let Some(path) = viewer.current_map() {
            writeln!(out, "map {}", path.display())?;
        }
        Ok(())
    }
}
