//! SHA-2 digest generator.
//!
//! Digests are computed over the UTF-8 bytes of the input and shown as
//! lowercase hex.

#[cfg(test)]
#[path = "hash_generator_test.rs"]
mod hash_generator_test;

use leptos::prelude::*;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::util::clipboard::copy_text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha384, Self::Sha512];

    pub fn label(self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    pub fn digest_hex(self, input: &str) -> String {
        match self {
            Self::Sha256 => to_hex(&Sha256::digest(input.as_bytes())),
            Self::Sha384 => to_hex(&Sha384::digest(input.as_bytes())),
            Self::Sha512 => to_hex(&Sha512::digest(input.as_bytes())),
        }
    }
}

pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write as _;

    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        let _ = write!(out, "{byte:02x}");
    }
    out
}

/// Every algorithm's digest of `input`, in [`HashAlgorithm::ALL`] order.
pub fn all_digests(input: &str) -> Vec<(HashAlgorithm, String)> {
    HashAlgorithm::ALL.iter().map(|algo| (*algo, algo.digest_hex(input))).collect()
}

#[component]
pub fn HashGenerator() -> impl IntoView {
    let input = RwSignal::new(String::new());
    let digests = Memo::new(move |_| input.with(|text| all_digests(text)));

    view! {
        <div class="tool-widget hash-generator">
            <textarea
                class="tool-widget__input"
                rows="6"
                placeholder="Text to hash"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
            ></textarea>
            <dl class="tool-widget__output hash-generator__digests">
                {move || {
                    digests
                        .get()
                        .into_iter()
                        .map(|(algo, hex)| {
                            let copy_value = hex.clone();
                            view! {
                                <div class="hash-generator__row">
                                    <dt>{algo.label()}</dt>
                                    <dd>
                                        <code>{hex}</code>
                                        <button class="btn btn--small" on:click=move |_| {
                                            copy_text(&copy_value);
                                        }>
                                            "Copy"
                                        </button>
                                    </dd>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </dl>
        </div>
    }
}
