pub mod audio {
    pub mod domain {
        pub mod audio_reader;
        pub mod decoded_audio;
    }
    pub mod infrastructure {
        pub mod ffmpeg_audio_reader;
    }
}

pub mod hardware {
    pub mod domain {
        pub mod hardware_config;
        pub mod hardware_selector;
    }
    pub mod infrastructure {
        pub mod host_probe;
    }
}

pub mod recognition {
    pub mod domain {
        pub mod decoding_config;
        pub mod model_size;
        pub mod recognition_info;
        pub mod segment;
        pub mod speech_recognizer;
    }
    pub mod infrastructure;
}

pub mod script {
    pub mod domain {
        pub mod script_detector;
        pub mod script_normalizer;
        pub mod target_script;
        pub mod transliterator;
    }
    pub mod infrastructure;
}

pub mod transcript {
    pub mod domain {
        pub mod transcript_result;
        pub mod transcript_writer;
    }
    pub mod infrastructure {
        pub mod json_transcript_writer;
    }
}

pub mod pipeline {
    pub mod progress_reporter;
    pub mod status_line;
    pub mod transcribe_error;
    pub mod transcribe_media_use_case;
    pub mod transcription_request;
}

pub mod shared {
    pub mod atomic_file;
    pub mod constants;
    #[cfg(test)]
    pub mod log_capture;
    pub mod model_resolver;
}
