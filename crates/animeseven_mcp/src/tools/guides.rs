//! Static workflow guides for MCP.
//!
//! Agents drive a multi-step workflow (search, confirm, translate,
//! publish, attach episodes); these tools hand them the instructions as
//! plain text instead of resources, which not every client supports.

use crate::tools::McpTool;
use crate::McpResult;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;

const OVERVIEW: &str = r#"# Anime publishing workflow overview

Adding an anime and its episodes happens in distinct stages:

1. **Search and identify the anime**
   - Query the catalog with the `animeSearch` tool
   - Present the candidates and let the user confirm the right one

2. **Prepare and translate the data**
   - Translate the description and title to Arabic when needed
   - Assemble the JSON structure required for publishing

3. **Publish the anime to the Facebook page**
   - Send the complete record with its cover image via `fbPostAnime`
   - Keep the returned `postId`; every later step needs it

4. **Attach the episodes as comments**
   - Format each episode's video links correctly (especially Facebook links)
   - Add the episodes one by one with `fbAddEpisodeComment`
"#;

const STEPS: &str = r#"# Detailed steps for adding an anime

## 1. Search for the anime
- Identify the anime title in the user's request (it often follows
  'أنمي' or 'anime')
- Search by title:
  ```
  animeSearch { "title": "Anime title" }
  ```
- Review the returned candidates (usually capped at 5)

## 2. Present the options
- Show a numbered list of the candidates with title, year and type
- Mark the most likely choice with an asterisk (*)
- Wait for the user to confirm a number before going further

## 3. Prepare the data
- Missing Arabic title:
  ```
  translateText { "text": "English title", "targetLanguage": "Arabic" }
  ```
- Description in Arabic:
  ```
  translateText { "text": "English description", "targetLanguage": "Arabic" }
  ```
  * If the anime has no description, write one from the available info
  * Mention the main plot, the genre and the target audience
- Check that every required field of the JSON structure is present

## 4. Publish the anime
- Call `fbPostAnime` with the complete record
- Keep the returned `postId` for the episode steps

## 5. Add the episodes
- For every episode, put the Facebook link into the required shape:
  - Required format: [...].facebook.com/XXXXXXXXXX/videos/XXXXXXXXXX/
  - Drop every URL parameter after the final "/"
- Call `fbAddEpisodeComment` once per episode, incrementing the number
"#;

const TIPS: &str = r#"# Practical tips

- Episode links usually appear in the request as 'الحلقة X: [link]'
- Facebook links must match [...].facebook.com/XXXXXXXXXX/videos/XXXXXXXXXX/
  - Parameters like '?idorvanity=' and 'app=fbl' must be removed
  - Extract the page id and the video id, then rebuild the URL in the
    required format
- Episode titles follow the format 'الحلقة ' + N and are always in Arabic
- Use '24' as the default episode duration when none is given
- Use 'Anime Seven' as the default value for addedBy when none is given
- Always wait for the user's confirmation before publishing anything
"#;

const EXAMPLE: &str = r#"# Full worked example

1. Search:
```
animeSearch { "title": "God Eater" }
```

2. Translate the description and the title:
```
translateText { "text": "In a post-apocalyptic Japan...", "targetLanguage": "Arabic" }
translateText { "text": "God Eater", "targetLanguage": "Arabic" }
```

3. Publish:
```
fbPostAnime {
  "animeData": {
    "type": "anime",
    "data": {
      "title": { "en": "God Eater", "jp": "ゴッドイーター", "ar": "آكل الآلهة" },
      "description": "في يابان ما بعد نهاية العالم...",
      "info": {
        "episodes": 13, "year": 2015, "rating": 7.2,
        "genres": ["Action", "Fantasy"], "studio": "ufotable",
        "rank": 2504, "status": "finished", "type": "TV", "season": "SUMMER"
      },
      "image": { "id": "anime-28626", "url": "https://cdn.myanimelist.net/images/anime/6/75289l.jpg" },
      "updatedAt": "2024-05-12T09:30:00Z"
    }
  }
}
```

4. Attach each episode to the returned postId:
```
fbAddEpisodeComment {
  "postId": "POST_ID",
  "episode": {
    "type": "episode",
    "episodeNumber": "1",
    "title": "الحلقة 1",
    "addedBy": "Anime Seven",
    "duration": "24",
    "isFiller": false,
    "servers": [
      {
        "name": "facebook",
        "quality": "HD",
        "url": "https://www.facebook.com/100064560333515/videos/1278144576105246/",
        "type": "facebook"
      }
    ],
    "releaseDate": "2024-05-12T18:00:00Z"
  }
}
```

Repeat step 4 for every episode, incrementing `episodeNumber`.
"#;

/// One static-text guide.
struct GuideTool {
    name: &'static str,
    description: &'static str,
    text: &'static str,
}

#[async_trait]
impl McpTool for GuideTool {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        self.description
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }

    async fn execute(&self, _input: Value) -> McpResult<Value> {
        Ok(Value::String(self.text.to_string()))
    }
}

/// The four workflow guide tools.
pub fn guide_tools() -> Vec<Arc<dyn McpTool>> {
    vec![
        Arc::new(GuideTool {
            name: "guideAnimeOverview",
            description: "Overview of the anime publishing workflow",
            text: OVERVIEW,
        }),
        Arc::new(GuideTool {
            name: "guideAnimeSteps",
            description: "Detailed steps for adding an anime",
            text: STEPS,
        }),
        Arc::new(GuideTool {
            name: "guideAnimeTips",
            description: "Practical tips for adding an anime",
            text: TIPS,
        }),
        Arc::new(GuideTool {
            name: "guideAnimeExample",
            description: "Full worked example of adding an anime and its episodes",
            text: EXAMPLE,
        }),
    ]
}
