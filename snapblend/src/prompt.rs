//! Instruction prompt assembly.

/// 构建单条合成指令。场景文本原样嵌入；附件顺序约定为先人像后产品。
pub fn compose_prompt(scene: &str) -> String {
    format!(
        "Create a realistic user-generated content style photo for social media. \
         Scene: {scene}. Take the person from the first attached image and the \
         product from the second attached image and blend them naturally into \
         that scene, with the person interacting with the product. Use soft \
         natural lighting, shallow depth of field, and an authentic candid \
         aesthetic. Output a single square image with a 1:1 aspect ratio."
    )
}
