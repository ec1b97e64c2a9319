//! Audio backed by a dedicated thread and raylib.
//!
//! This module hosts the background audio thread and the systems that
//! bridge it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread, owns the raylib audio
//!   device, and processes [`AudioCmd`](crate::events::audio::AudioCmd)
//!   messages, emitting
//!   [`AudioMessage`](crate::events::audio::AudioMessage) replies.
//! - [`forward_audio_cmds`] moves `AudioCmd` messages written by game
//!   systems onto the channel toward the audio thread.
//! - [`poll_audio_messages`] drains the audio thread's reply channel into
//!   the ECS message queue each frame.
//! - [`log_audio_messages`] surfaces load failures in the game log; a
//!   missing sound file degrades to silence, never to an error.
//!
//! The design keeps raylib audio API calls isolated to a single thread,
//! while the main game thread communicates via lock-free channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, warn};
use raylib::core::audio::{Music, RaylibAudio, Sound};
use rustc_hash::{FxHashMap, FxHashSet};

/// Drain pending replies from the audio thread into the ECS
/// [`Messages<AudioMessage>`] mailbox. Non-blocking, runs each frame.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut messages: ResMut<Messages<AudioMessage>>) {
    messages.update();
}

/// Forward ECS `AudioCmd` messages to the audio thread via the bridge
/// sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // Ignore send errors on shutdown.
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for `AudioCmd` so same-frame readers can
/// observe writes.
pub fn update_bevy_audio_cmds(mut messages: ResMut<Messages<AudioCmd>>) {
    messages.update();
}

/// Log audio failures. The game ships no mandatory audio assets, so a
/// missing file is only worth a warning.
pub fn log_audio_messages(mut reader: MessageReader<AudioMessage>) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("Music '{}' failed to load: {}", id, error);
            }
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("Sound effect '{}' failed to load: {}", id, error);
            }
            AudioMessage::FxMissing { id } => {
                debug!("Sound effect '{}' requested but not loaded", id);
            }
            other => debug!("Audio: {:?}", other),
        }
    }
}

/// Entry point of the dedicated audio thread.
///
/// Owns all `Music` and `Sound` handles for the life of the thread, reacts
/// to [`AudioCmd`] inputs, pumps music streams (restarting looped tracks
/// that reach their end), and exits cleanly on [`AudioCmd::Shutdown`].
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    let audio = match RaylibAudio::init_audio_device() {
        Ok(device) => device,
        Err(e) => {
            // No audio device: drain commands so senders never block, play
            // nothing.
            warn!("Audio device unavailable: {}", e);
            while let Ok(cmd) = rx_cmd.recv() {
                if matches!(cmd, AudioCmd::Shutdown) {
                    break;
                }
            }
            return;
        }
    };

    debug!("Audio thread running (id={:?})", std::thread::current().id());

    let mut musics: FxHashMap<String, Music> = FxHashMap::default();
    let mut playing: FxHashSet<String> = FxHashSet::default();
    let mut looped: FxHashSet<String> = FxHashSet::default();
    let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

    'run: loop {
        // 1) Drain commands
        for cmd in rx_cmd.try_iter() {
            match cmd {
                AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                    Ok(music) => {
                        musics.insert(id.clone(), music);
                        let _ = tx_msg.send(AudioMessage::MusicLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_msg.send(AudioMessage::MusicLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayMusic {
                    id,
                    looped: want_loop,
                } => {
                    if let Some(music) = musics.get(&id) {
                        music.seek_stream(0.0);
                        music.play_stream();
                        playing.insert(id.clone());
                        if want_loop {
                            looped.insert(id);
                        } else {
                            looped.remove(&id);
                        }
                    }
                }
                AudioCmd::StopMusic { id } => {
                    if let Some(music) = musics.get(&id) {
                        music.stop_stream();
                        playing.remove(&id);
                        looped.remove(&id);
                    }
                }
                AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                    Ok(sound) => {
                        sounds.insert(id.clone(), sound);
                        let _ = tx_msg.send(AudioMessage::FxLoaded { id });
                    }
                    Err(e) => {
                        let _ = tx_msg.send(AudioMessage::FxLoadFailed {
                            id,
                            error: e.to_string(),
                        });
                    }
                },
                AudioCmd::PlayFx { id } => {
                    if let Some(sound) = sounds.get(&id) {
                        sound.play();
                    } else {
                        let _ = tx_msg.send(AudioMessage::FxMissing { id });
                    }
                }
                AudioCmd::Shutdown => {
                    break 'run;
                }
            }
        }

        // 2) Pump streaming + detect ends. `update_stream()` must be called
        //    regularly while a track plays; a looped track that ran out is
        //    restarted, a one-shot emits Finished exactly once.
        let mut ended: Vec<String> = Vec::new();
        for id in playing.iter() {
            if let Some(music) = musics.get(id) {
                if music.is_stream_playing() {
                    music.update_stream();
                } else {
                    let len = music.get_time_length();
                    let played = music.get_time_played();
                    if played >= len - 0.01 {
                        ended.push(id.clone());
                    }
                }
            }
        }
        for id in ended.iter() {
            if looped.contains(id) {
                if let Some(music) = musics.get(id) {
                    music.seek_stream(0.0);
                    music.play_stream();
                }
            } else {
                playing.remove(id);
                let _ = tx_msg.send(AudioMessage::MusicFinished { id: id.clone() });
            }
        }

        std::thread::sleep(std::time::Duration::from_millis(10));
    }

    debug!("Audio thread exiting");
    // musics and sounds drop before `audio`, satisfying lifetimes
}
